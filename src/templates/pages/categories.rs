use maud::{html, Markup};

use crate::domain::dates::display_date;
use crate::domain::forms::{FormErrors, FormValues};
use crate::domain::Category;
use crate::templates::components::forms::{Control, Field};
use crate::templates::components::{image, post_button};
use crate::templates::pages::{cell, detail_page_with_media, form_page};

const BASE: &str = "/categories";

pub fn category_row(category: &Category) -> Markup {
    let href = format!("{BASE}/{}", category.id);
    html! {
        tr {
            (cell(html! { a href=(href) { (category.display_title()) } }))
            (cell(html! { (category.title_en) }))
            (cell(html! { (display_date(category.created_at.as_deref())) }))
            (cell(html! {
                a href=(href) { "View" } " · "
                a href=(format!("{href}/edit")) { "Edit" } " "
                (post_button(&format!("{href}/delete"), "Delete", None))
            }))
        }
    }
}

pub fn category_detail(category: &Category) -> Markup {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "—".to_string());
    let rows = [
        ("ID", category.id.to_string()),
        ("Title", category.title.clone()),
        ("Title (EN)", category.title_en.clone()),
        ("Title (ES)", category.title_es.clone()),
        ("Description", category.description.clone()),
        ("Description (EN)", opt(&category.description_en)),
        ("Description (ES)", opt(&category.description_es)),
        ("Created", display_date(category.created_at.as_deref())),
        ("Updated", display_date(category.updated_at.as_deref())),
    ];

    let href = format!("{BASE}/{}", category.id);
    let media = html! {
        @match category.image_url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(src) => { div class="card" { (image(src, category.display_title())) } }
            None => { p style="color: #6b7280;" { "No image" } }
        }
    };
    detail_page_with_media(
        category.display_title(),
        BASE,
        media,
        &rows,
        html! {
            a href=(format!("{href}/edit")) class="btn" { "Edit" }
            (post_button(&format!("{href}/delete"), "Delete", None))
        },
    )
}

/// Creating only insists on the English title.
pub fn category_fields(require_es: bool) -> Vec<Field> {
    let title_es = Field::text("title_es", "Title (ES)");
    vec![
        Field::text("title_en", "Title (EN)"),
        if require_es { title_es } else { title_es.optional() },
        Field::text("description_en", "Description (EN)").with(Control::TextArea).optional(),
        Field::text("description_es", "Description (ES)").with(Control::TextArea).optional(),
        Field::text("image", "Image (max 2 MB)")
            .with(Control::File { accept: "image/*" })
            .optional(),
    ]
}

pub fn category_edit(id: i64, values: &FormValues, errors: &FormErrors) -> Markup {
    form_page(
        "Edit category",
        BASE,
        &format!("{BASE}/{id}/edit"),
        &category_fields(true),
        values,
        errors,
    )
}

pub fn category_create(values: &FormValues, errors: &FormErrors) -> Markup {
    form_page(
        "New category",
        BASE,
        &format!("{BASE}/create"),
        &category_fields(false),
        values,
        errors,
    )
}
