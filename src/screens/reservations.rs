use maud::Markup;
use tracing::info;

use crate::api::{AdminApi, ApiError};
use crate::app::App;
use crate::domain::forms::{parse_reservation, reservation_values, FormErrors, FormValues};
use crate::domain::reservation::STATUSES;
use crate::domain::Reservation;
use crate::listview::{ListSchema, SortDirection, SortKey, STATUS_FILTER};
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::screens::Screen;
use crate::spreadsheets::ExportColumn;
use crate::templates::pages::reservations::{reservation_detail, reservation_edit, reservation_row};

pub struct Reservations;

fn client_key(r: &Reservation) -> SortKey<'_> {
    match &r.user {
        Some(u) => SortKey::Text(u.full_name().into()),
        None => SortKey::Missing,
    }
}

impl Screen for Reservations {
    type Record = Reservation;

    const PATH: &'static str = "/reservations";
    const TITLE: &'static str = "Reservations";

    fn schema(page_size: usize) -> ListSchema<Reservation> {
        ListSchema::new("reservations", "created_at", SortDirection::Descending)
            .page_size(page_size)
            .search(|r: &Reservation| r.post_title())
            .search(|r: &Reservation| r.user.as_ref().map(|u| u.first_name.as_str()))
            .search(|r: &Reservation| r.user.as_ref().map(|u| u.last_name.as_str()))
            .search(|r: &Reservation| r.user.as_ref().map(|u| u.email.as_str()))
            .column("offer", "Offer", |r: &Reservation| SortKey::opt_text(r.post_title()))
            .column("client", "Client", client_key)
            .column("start_date", "Start", |r: &Reservation| SortKey::date(&r.start_date))
            .column("end_date", "End", |r: &Reservation| SortKey::date(&r.end_date))
            .column("people_count", "People", |r: &Reservation| {
                SortKey::number(r.people_count as f64)
            })
            .column("status", "Status", |r: &Reservation| SortKey::text(&r.status))
            .column("created_at", "Created", |r: &Reservation| {
                SortKey::opt_date(r.created_at.as_deref())
            })
            .filter(STATUS_FILTER, "Status", STATUSES, |r: &Reservation| Some(r.status.as_str()))
    }

    fn fetch(api: &dyn AdminApi) -> Result<Vec<Reservation>, ApiError> {
        api.list_reservations()
    }

    fn row(record: &Reservation) -> Markup {
        reservation_row(record)
    }

    fn export_columns() -> Vec<ExportColumn<Reservation>> {
        vec![
            ExportColumn::new("ID", |r: &Reservation| SortKey::number(r.id as f64)),
            ExportColumn::new("Offer", |r: &Reservation| SortKey::opt_text(r.post_title())),
            ExportColumn::new("Client", client_key),
            ExportColumn::new("Client email", |r: &Reservation| {
                SortKey::opt_text(r.user.as_ref().map(|u| u.email.as_str()))
            }),
            ExportColumn::new("Start", |r: &Reservation| SortKey::date(&r.start_date)),
            ExportColumn::new("End", |r: &Reservation| SortKey::date(&r.end_date)),
            ExportColumn::new("People", |r: &Reservation| SortKey::number(r.people_count as f64)),
            ExportColumn::new("Additional", |r: &Reservation| {
                SortKey::number(r.additional_people_count as f64)
            }),
            ExportColumn::new("Babies", |r: &Reservation| SortKey::number(r.babies_count as f64)),
            ExportColumn::new("Pets", |r: &Reservation| SortKey::number(r.pets_count as f64)),
            ExportColumn::new("Status", |r: &Reservation| SortKey::text(&r.status)),
            ExportColumn::new("Created", |r: &Reservation| {
                SortKey::opt_date(r.created_at.as_deref())
            }),
        ]
    }
}

pub fn detail(app: &App, id: i64) -> ResultResp {
    let res = app.api.get_reservation(id)?;
    html_response(reservation_detail(&res))
}

pub fn edit_form(app: &App, id: i64) -> ResultResp {
    let res = app.api.get_reservation(id)?;
    html_response(reservation_edit(id, &reservation_values(&res), &FormErrors::default()))
}

pub fn edit_submit(app: &App, id: i64, values: &FormValues) -> ResultResp {
    match parse_reservation(id, values) {
        Ok(update) => {
            app.api.update_reservation(id, &update)?;
            info!(reservation_id = id, status = %update.status, "reservation updated");
            redirect(&format!("{}/{id}", Reservations::PATH))
        }
        Err(errors) => html_response_with_status(400, reservation_edit(id, values, &errors)),
    }
}
