use maud::{html, Markup};

use crate::domain::dates::display_date;
use crate::domain::forms::{FormErrors, FormValues};
use crate::domain::User;
use crate::templates::components::forms::{Control, Field};
use crate::templates::components::{badge, post_button};
use crate::templates::pages::{cell, detail_page, form_page};

const BASE: &str = "/users";

fn verification_label(user: &User) -> &'static str {
    if user.is_verified() {
        "Unverify"
    } else {
        "Verify"
    }
}

pub fn user_row(user: &User) -> Markup {
    let href = format!("{BASE}/{}", user.id);
    html! {
        tr {
            (cell(html! { a href=(href) { (user.full_name()) } }))
            (cell(html! { (user.email) }))
            (cell(html! { (user.user_type.as_deref().unwrap_or("—")) }))
            (cell(badge(user.verification_status.as_deref().unwrap_or(""))))
            (cell(html! { (display_date(user.created_at.as_deref())) }))
            (cell(html! {
                a href=(href) { "View" } " · "
                a href=(format!("{href}/edit")) { "Edit" } " "
                (post_button(&format!("{href}/verification"), verification_label(user), Some("#list-table")))
            }))
        }
    }
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "Yes" } else { "No" };
    text.to_string()
}

pub fn user_detail(user: &User) -> Markup {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "—".to_string());
    let rows = [
        ("ID", user.id.to_string()),
        ("Name", user.full_name()),
        ("Email", user.email.clone()),
        ("Phone", opt(&user.phone)),
        ("Country", opt(&user.country)),
        ("Address", opt(&user.address)),
        ("DNI", opt(&user.dni)),
        ("Birthday", display_date(user.birthday.as_deref())),
        ("Type", opt(&user.user_type)),
        ("Verification", opt(&user.verification_status)),
        ("Verified at", display_date(user.verified_at.as_deref())),
        ("Email verified", yes_no(user.email_verified)),
        ("Two-factor", yes_no(user.two_factor)),
        ("Commission %", user.percentaje.map(|p| p.to_string()).unwrap_or_else(|| "—".into())),
        ("Created", display_date(user.created_at.as_deref())),
    ];

    let href = format!("{BASE}/{}", user.id);
    detail_page(
        &user.full_name(),
        BASE,
        &rows,
        html! {
            a href=(format!("{href}/edit")) class="btn" { "Edit" }
            (post_button(&format!("{href}/verification"), verification_label(user), None))
        },
    )
}

pub fn user_fields() -> Vec<Field> {
    vec![
        Field::text("firstName", "First name"),
        Field::text("lastName", "Last name"),
        Field::text("email", "Email").with(Control::Email),
        Field::text("phone", "Phone").optional(),
    ]
}

pub fn user_edit(id: i64, values: &FormValues, errors: &FormErrors) -> Markup {
    form_page(
        "Edit user",
        BASE,
        &format!("{BASE}/{id}/edit"),
        &user_fields(),
        values,
        errors,
    )
}
