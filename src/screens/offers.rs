use maud::Markup;
use tracing::info;

use crate::api::{AdminApi, ApiError};
use crate::app::App;
use crate::domain::forms::{parse_post, post_values, FormErrors, FormValues};
use crate::domain::post::STATUSES;
use crate::domain::Post;
use crate::listview::{ListSchema, SortDirection, SortKey, STATUS_FILTER};
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::screens::{refreshed, Screen};
use crate::spreadsheets::ExportColumn;
use crate::templates::pages::offers::{offer_detail, offer_edit, offer_row};

pub struct Offers;

impl Screen for Offers {
    type Record = Post;

    const PATH: &'static str = "/offers";
    const TITLE: &'static str = "Offers";

    fn schema(page_size: usize) -> ListSchema<Post> {
        ListSchema::new("offers", "created_at", SortDirection::Descending)
            .page_size(page_size)
            .search(|p: &Post| Some(p.title.as_str()))
            .search(|p: &Post| Some(p.sub_title.as_str()))
            .search(|p: &Post| p.owner_email())
            .column("title", "Title", |p: &Post| SortKey::text(&p.title))
            .column("owner", "Owner", |p: &Post| SortKey::opt_text(p.owner_email()))
            .column("price", "Price", |p: &Post| SortKey::number(p.price))
            .column("status", "Status", |p: &Post| SortKey::text(&p.status))
            .column("expire_date", "Expires", |p: &Post| {
                SortKey::opt_date(p.expire_date.as_deref())
            })
            .column("created_at", "Created", |p: &Post| {
                SortKey::opt_date(p.created_at.as_deref())
            })
            .filter(STATUS_FILTER, "Status", STATUSES, |p: &Post| Some(p.status.as_str()))
    }

    fn fetch(api: &dyn AdminApi) -> Result<Vec<Post>, ApiError> {
        api.list_posts()
    }

    fn row(record: &Post) -> Markup {
        offer_row(record)
    }

    fn export_columns() -> Vec<ExportColumn<Post>> {
        vec![
            ExportColumn::new("ID", |p: &Post| SortKey::number(p.id as f64)),
            ExportColumn::new("Title", |p: &Post| SortKey::text(&p.title)),
            ExportColumn::new("Subtitle", |p: &Post| SortKey::text(&p.sub_title)),
            ExportColumn::new("Owner", |p: &Post| SortKey::opt_text(p.owner_email())),
            ExportColumn::new("Price", |p: &Post| SortKey::number(p.price)),
            ExportColumn::new("Bought", |p: &Post| SortKey::number(p.bought as f64)),
            ExportColumn::new("Status", |p: &Post| SortKey::text(&p.status)),
            ExportColumn::new("Expires", |p: &Post| SortKey::opt_date(p.expire_date.as_deref())),
            ExportColumn::new("Created", |p: &Post| SortKey::opt_date(p.created_at.as_deref())),
        ]
    }
}

pub fn detail(app: &App, id: i64) -> ResultResp {
    let post = app.api.get_post(id)?;
    html_response(offer_detail(&post, &app.image_base_url))
}

pub fn edit_form(app: &App, id: i64) -> ResultResp {
    let post = app.api.get_post(id)?;
    html_response(offer_edit(id, &post_values(&post), &FormErrors::default()))
}

pub fn edit_submit(app: &App, id: i64, values: &FormValues) -> ResultResp {
    match parse_post(values) {
        Ok(update) => {
            app.api.update_post(id, &update)?;
            info!(post_id = id, "offer updated");
            redirect(&format!("{}/{id}", Offers::PATH))
        }
        Err(errors) => html_response_with_status(400, offer_edit(id, values, &errors)),
    }
}

/// Flip active/inactive, then show the list from its defaults.
pub fn toggle_status(app: &App, id: i64, htmx: bool) -> ResultResp {
    let post = app.api.get_post(id)?;
    let next = post.toggled_status();
    app.api.change_post_status(id, next)?;
    info!(post_id = id, status = next, "offer status changed");

    refreshed::<Offers>(app, htmx)
}
