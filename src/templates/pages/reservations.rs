use maud::{html, Markup};

use crate::domain::dates::display_date;
use crate::domain::forms::{FormErrors, FormValues};
use crate::domain::reservation::STATUSES;
use crate::domain::Reservation;
use crate::templates::components::badge;
use crate::templates::components::forms::{Control, Field};
use crate::templates::pages::{cell, detail_page, form_page};

const BASE: &str = "/reservations";

pub fn reservation_row(res: &Reservation) -> Markup {
    let href = format!("{BASE}/{}", res.id);
    html! {
        tr {
            (cell(html! { a href=(href) { (res.post_title().unwrap_or("—")) } }))
            (cell(html! { (res.client_name()) }))
            (cell(html! { (display_date(Some(res.start_date.as_str()))) }))
            (cell(html! { (display_date(Some(res.end_date.as_str()))) }))
            (cell(html! { (res.people_count) }))
            (cell(badge(&res.status)))
            (cell(html! { (display_date(res.created_at.as_deref())) }))
            (cell(html! {
                a href=(href) { "View" } " · "
                a href=(format!("{href}/edit")) { "Edit" }
            }))
        }
    }
}

pub fn reservation_detail(res: &Reservation) -> Markup {
    let client = res
        .user
        .as_ref()
        .map(|u| format!("{} <{}>", u.full_name(), u.email))
        .unwrap_or_else(|| format!("User #{}", res.user_id));
    let offer = res
        .post_title()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Offer #{}", res.post_id));
    let rows = [
        ("ID", res.id.to_string()),
        ("Offer", offer),
        ("Client", client),
        ("Start", display_date(Some(res.start_date.as_str()))),
        ("End", display_date(Some(res.end_date.as_str()))),
        ("People", res.people_count.to_string()),
        ("Additional people", res.additional_people_count.to_string()),
        ("Babies", res.babies_count.to_string()),
        ("Pets", res.pets_count.to_string()),
        ("Status", res.status.clone()),
        ("Created", display_date(res.created_at.as_deref())),
        ("Updated", display_date(res.updated_at.as_deref())),
    ];

    detail_page(
        &format!("Reservation #{}", res.id),
        BASE,
        &rows,
        html! {
            a href=(format!("{BASE}/{}/edit", res.id)) class="btn" { "Edit" }
        },
    )
}

pub fn reservation_fields() -> Vec<Field> {
    let count = |name, label| Field::text(name, label).with(Control::Number { min: 0, step: "1" });
    vec![
        Field::text("start_date", "Start date").with(Control::Date),
        Field::text("end_date", "End date").with(Control::Date),
        Field::text("people_count", "People").with(Control::Number { min: 1, step: "1" }),
        count("additional_people_count", "Additional people"),
        count("babies_count", "Babies"),
        count("pets_count", "Pets"),
        Field::text("user_id", "Client ID").with(Control::Number { min: 1, step: "1" }),
        Field::text("post_id", "Offer ID").with(Control::Number { min: 1, step: "1" }),
        Field::text("status", "Status").with(Control::Select(STATUSES)),
    ]
}

pub fn reservation_edit(id: i64, values: &FormValues, errors: &FormErrors) -> Markup {
    form_page(
        "Edit reservation",
        BASE,
        &format!("{BASE}/{id}/edit"),
        &reservation_fields(),
        values,
        errors,
    )
}
