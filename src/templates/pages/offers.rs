use maud::{html, Markup};

use crate::domain::dates::display_date;
use crate::domain::forms::{FormErrors, FormValues};
use crate::domain::post::STATUSES;
use crate::domain::Post;
use crate::templates::components::forms::{Control, Field};
use crate::templates::components::{badge, gallery, image, post_button};
use crate::templates::pages::{cell, detail_page_with_media, form_page};

const BASE: &str = "/offers";

fn status_label(post: &Post) -> &'static str {
    if post.is_active() {
        "Deactivate"
    } else {
        "Activate"
    }
}

pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

pub fn offer_row(post: &Post) -> Markup {
    let href = format!("{BASE}/{}", post.id);
    html! {
        tr {
            (cell(html! { a href=(href) { (post.title) } }))
            (cell(html! { (post.owner_email().unwrap_or("—")) }))
            (cell(html! { (format_price(post.price)) }))
            (cell(badge(&post.status)))
            (cell(html! { (display_date(post.expire_date.as_deref())) }))
            (cell(html! { (display_date(post.created_at.as_deref())) }))
            (cell(html! {
                a href=(href) { "View" } " · "
                a href=(format!("{href}/edit")) { "Edit" } " "
                (post_button(&format!("{href}/status"), status_label(post), Some("#list-table")))
            }))
        }
    }
}

/// `image_base` resolves the relative image paths the API stores.
pub fn offer_detail(post: &Post, image_base: &str) -> Markup {
    let num = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_else(|| "—".to_string());
    let owner = post
        .user
        .as_ref()
        .map(|u| format!("{} <{}>", u.full_name(), u.email))
        .unwrap_or_else(|| "—".to_string());
    let rows = [
        ("ID", post.id.to_string()),
        ("Title", post.title.clone()),
        ("Subtitle", post.sub_title.clone()),
        ("Description", post.description.clone()),
        ("Owner", owner),
        ("Phone", post.phone.clone().unwrap_or_else(|| "—".into())),
        ("Address", post.address.clone().unwrap_or_else(|| "—".into())),
        ("Price", format_price(post.price)),
        ("Bought", post.bought.to_string()),
        ("Status", post.status.clone()),
        ("Expires", display_date(post.expire_date.as_deref())),
        ("Quantity", num(post.established_quantity)),
        ("Cancellation time (h)", num(post.cancellation_time)),
        (
            "Rating",
            post.average_rating
                .map(|r| format!("{r:.1} ({} reviews)", post.total_reviews.unwrap_or(0)))
                .unwrap_or_else(|| "—".into()),
        ),
        ("Created", display_date(post.created_at.as_deref())),
        ("Updated", display_date(post.updated_at.as_deref())),
    ];

    let href = format!("{BASE}/{}", post.id);
    let media = html! {
        @if let Some(src) = post.cover_url(image_base) {
            div class="card" style="text-align: center;" { (image(&src, "Cover image")) }
        }
    };
    detail_page_with_media(
        &post.title,
        BASE,
        html! { (media) (gallery("Gallery", &post.gallery_urls(image_base))) },
        &rows,
        html! {
            a href=(format!("{href}/edit")) class="btn" { "Edit" }
            (post_button(&format!("{href}/status"), status_label(post), None))
        },
    )
}

pub fn offer_fields() -> Vec<Field> {
    vec![
        Field::text("title", "Title"),
        Field::text("subTitle", "Subtitle"),
        Field::text("description", "Description").with(Control::TextArea),
        Field::text("price", "Price").with(Control::Number { min: 0, step: "0.01" }),
        Field::text("expire_date", "Expiry date").with(Control::Date),
        Field::text("status", "Status").with(Control::Select(STATUSES)),
        Field::text("established_quantity", "Quantity").with(Control::Number { min: 0, step: "1" }),
        Field::text("cancellation_time", "Cancellation time (hours)")
            .with(Control::Number { min: 0, step: "1" }),
    ]
}

pub fn offer_edit(id: i64, values: &FormValues, errors: &FormErrors) -> Markup {
    form_page(
        "Edit offer",
        BASE,
        &format!("{BASE}/{id}/edit"),
        &offer_fields(),
        values,
        errors,
    )
}
