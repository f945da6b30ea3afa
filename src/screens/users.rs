use maud::Markup;
use tracing::info;

use crate::api::{AdminApi, ApiError};
use crate::app::App;
use crate::domain::forms::{parse_user, user_values, FormErrors, FormValues};
use crate::domain::user::{TYPES, VERIFICATION_STATUSES};
use crate::domain::User;
use crate::listview::{ListSchema, SortDirection, SortKey, STATUS_FILTER, TYPE_FILTER};
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::screens::{refreshed, Screen};
use crate::spreadsheets::ExportColumn;
use crate::templates::pages::users::{user_detail, user_edit, user_row};

pub struct Users;

impl Screen for Users {
    type Record = User;

    const PATH: &'static str = "/users";
    const TITLE: &'static str = "Users";

    fn schema(page_size: usize) -> ListSchema<User> {
        ListSchema::new("users", "created_at", SortDirection::Descending)
            .page_size(page_size)
            .search(|u: &User| Some(u.first_name.as_str()))
            .search(|u: &User| Some(u.last_name.as_str()))
            .search(|u: &User| Some(u.email.as_str()))
            .column("firstName", "Name", |u: &User| SortKey::text(&u.first_name))
            .column("email", "Email", |u: &User| SortKey::text(&u.email))
            .column("type", "Type", |u: &User| SortKey::opt_text(u.user_type.as_deref()))
            .column("verification_status", "Status", |u: &User| {
                SortKey::opt_text(u.verification_status.as_deref())
            })
            .column("created_at", "Created", |u: &User| {
                SortKey::opt_date(u.created_at.as_deref())
            })
            .filter(STATUS_FILTER, "Status", VERIFICATION_STATUSES, |u: &User| {
                u.verification_status.as_deref()
            })
            .filter(TYPE_FILTER, "Type", TYPES, |u: &User| u.user_type.as_deref())
    }

    fn fetch(api: &dyn AdminApi) -> Result<Vec<User>, ApiError> {
        api.list_users()
    }

    fn row(record: &User) -> Markup {
        user_row(record)
    }

    fn export_columns() -> Vec<ExportColumn<User>> {
        vec![
            ExportColumn::new("ID", |u: &User| SortKey::number(u.id as f64)),
            ExportColumn::new("First name", |u: &User| SortKey::text(&u.first_name)),
            ExportColumn::new("Last name", |u: &User| SortKey::text(&u.last_name)),
            ExportColumn::new("Email", |u: &User| SortKey::text(&u.email)),
            ExportColumn::new("Phone", |u: &User| SortKey::opt_text(u.phone.as_deref())),
            ExportColumn::new("Country", |u: &User| SortKey::opt_text(u.country.as_deref())),
            ExportColumn::new("Type", |u: &User| SortKey::opt_text(u.user_type.as_deref())),
            ExportColumn::new("Status", |u: &User| {
                SortKey::opt_text(u.verification_status.as_deref())
            }),
            ExportColumn::new("Created", |u: &User| SortKey::opt_date(u.created_at.as_deref())),
        ]
    }
}

pub fn detail(app: &App, id: i64) -> ResultResp {
    let user = app.api.get_user(id)?;
    html_response(user_detail(&user))
}

pub fn edit_form(app: &App, id: i64) -> ResultResp {
    let user = app.api.get_user(id)?;
    html_response(user_edit(id, &user_values(&user), &FormErrors::default()))
}

pub fn edit_submit(app: &App, id: i64, values: &FormValues) -> ResultResp {
    match parse_user(values) {
        Ok(update) => {
            app.api.update_user(id, &update)?;
            info!(user_id = id, "user updated");
            redirect(&format!("{}/{id}", Users::PATH))
        }
        Err(errors) => html_response_with_status(400, user_edit(id, values, &errors)),
    }
}

/// Flip verified/unverified, then show the list from its defaults.
pub fn toggle_verification(app: &App, id: i64, htmx: bool) -> ResultResp {
    let user = app.api.get_user(id)?;
    let next = user.toggled_verification();
    app.api.change_user_verification(id, next)?;
    info!(user_id = id, status = next, "verification changed");

    refreshed::<Users>(app, htmx)
}
