use maud::{html, Markup};

use crate::domain::forms::{FormErrors, FormValues};
use crate::listview::{ListSchema, ListState};
use crate::templates::components::detail_list;
use crate::templates::components::forms::{edit_form, Field};
use crate::templates::components::table::list_controls;
use crate::templates::desktop_layout;

pub mod categories;
pub mod dashboard;
pub mod offers;
pub mod reservations;
pub mod users;

pub use dashboard::{dashboard_page, DashboardVm};

/// Table screen: controls above the swappable table fragment.
pub fn list_page<R>(
    title: &str,
    base: &str,
    schema: &ListSchema<R>,
    state: &ListState,
    table: Markup,
) -> Markup {
    desktop_layout(
        title,
        base,
        html! {
            (list_controls(base, schema, state))
            (table)
        },
    )
}

pub fn detail_page(title: &str, base: &str, rows: &[(&str, String)], actions: Markup) -> Markup {
    detail_page_with_media(title, base, html! {}, rows, actions)
}

/// Detail page with images above the field list.
pub fn detail_page_with_media(
    title: &str,
    base: &str,
    media: Markup,
    rows: &[(&str, String)],
    actions: Markup,
) -> Markup {
    desktop_layout(
        title,
        base,
        html! {
            (media)
            section class="card" {
                (detail_list(rows))
            }
            div class="actions" style="display: flex; gap: 10px; margin-top: 1rem;" {
                (actions)
                a href=(base) { "← Back to list" }
            }
        },
    )
}

pub fn form_page(
    title: &str,
    base: &str,
    action: &str,
    fields: &[Field],
    values: &FormValues,
    errors: &FormErrors,
) -> Markup {
    desktop_layout(title, base, edit_form(action, base, fields, values, errors))
}

/// Cell helper shared by the row renderers.
pub(crate) fn cell(content: Markup) -> Markup {
    html! {
        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (content) }
    }
}
