//! Table screens: one `ListScreen` per request, fed by the API, plus the
//! shared handlers every resource uses (list, htmx partial, export,
//! refresh after a status change).

pub mod categories;
pub mod dashboard;
pub mod offers;
pub mod reservations;
pub mod users;

use maud::Markup;
use tracing::{debug, warn};

use crate::api::{AdminApi, ApiError};
use crate::app::App;
use crate::listview::{compute, sorted_all, total_pages, DerivedView, ListSchema, ListState};
use crate::errors::ServerError;
use crate::responses::{
    html_fragment_pushing, html_response, html_response_with_status, redirect, ResultResp,
};
use crate::spreadsheets::{export_view_xlsx, ExportColumn};
use crate::templates::components::table::{data_table, failed_table};
use crate::templates::pages::list_page;

/// Identifies one fetch. Only the most recently issued ticket may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

pub struct ListScreen<R> {
    schema: ListSchema<R>,
    records: Vec<R>,
    state: ListState,
    loading: bool,
    error: Option<String>,
    issued: u64,
}

impl<R> ListScreen<R> {
    pub fn new(schema: ListSchema<R>) -> Self {
        let state = schema.initial_state();
        Self::with_state(schema, state)
    }

    pub fn with_state(schema: ListSchema<R>, state: ListState) -> Self {
        Self {
            schema,
            records: Vec::new(),
            state,
            loading: false,
            error: None,
            issued: 0,
        }
    }

    /// Screen whose state comes from the request's query string.
    pub fn from_query(schema: ListSchema<R>, query: &str) -> Self {
        let state = ListState::from_query(&schema, query);
        Self::with_state(schema, state)
    }

    pub fn schema(&self) -> &ListSchema<R> {
        &self.schema
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.loading = true;
        FetchTicket(self.issued)
    }

    /// Land a fetch result. Returns `false` if a newer fetch was issued
    /// since `ticket`; the result is then dropped.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<R>, ApiError>) -> bool {
        if ticket.0 != self.issued {
            warn!(
                screen = self.schema.name,
                ticket = ticket.0,
                latest = self.issued,
                "dropping stale fetch result"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(records) => {
                debug!(screen = self.schema.name, count = records.len(), "records loaded");
                self.records = records;
                self.error = None;
            }
            Err(e) => {
                warn!(screen = self.schema.name, error = %e, "fetch failed");
                self.error = Some(e.to_string());
            }
        }
        self.clamp_page();
        true
    }

    // A page parsed from the URL may lie past the end of what was loaded.
    fn clamp_page(&mut self) {
        let filtered = self.sorted_all().len();
        let pages = total_pages(filtered, self.state.page_size());
        self.state.clamp_page(pages);
    }

    /// Begin and complete a fetch in one go.
    pub fn load(&mut self, fetch: impl FnOnce() -> Result<Vec<R>, ApiError>) {
        let ticket = self.begin_fetch();
        self.complete_fetch(ticket, fetch());
    }

    /// A record changed on the server: back to the defaults and refetch.
    pub fn after_status_change(&mut self) -> FetchTicket {
        self.state = self.schema.initial_state();
        self.begin_fetch()
    }

    /// `None` while a fetch is in flight.
    pub fn view(&self) -> Option<DerivedView<'_, R>> {
        if self.loading {
            return None;
        }
        Some(compute(&self.schema, &self.records, &self.state))
    }

    /// Every filtered, sorted record, ignoring pagination.
    pub fn sorted_all(&self) -> Vec<&R> {
        sorted_all(&self.schema, &self.records, &self.state)
    }
}

/// What a resource plugs into the shared list handlers.
pub trait Screen {
    type Record;

    /// Route prefix, e.g. `/users`.
    const PATH: &'static str;
    const TITLE: &'static str;

    fn schema(page_size: usize) -> ListSchema<Self::Record>;
    fn fetch(api: &dyn AdminApi) -> Result<Vec<Self::Record>, ApiError>;
    /// One `<tr>`: a cell per schema column, then actions.
    fn row(record: &Self::Record) -> Markup;
    fn export_columns() -> Vec<ExportColumn<Self::Record>>;
}

fn loaded<S: Screen>(app: &App, mut screen: ListScreen<S::Record>) -> ListScreen<S::Record> {
    screen.load(|| S::fetch(app.api.as_ref()));
    screen
}

fn table_fragment<S: Screen>(screen: &ListScreen<S::Record>) -> Markup {
    let retry = screen.state().href(S::PATH);
    match (screen.error(), screen.view()) {
        (Some(message), _) => failed_table(message, &retry),
        (None, Some(view)) => data_table(S::PATH, screen.schema(), screen.state(), &view, S::row),
        (None, None) => failed_table("Still loading, try again.", &retry),
    }
}

/// `GET /{resource}`. Full page, or only the table for htmx.
pub fn list<S: Screen>(app: &App, query: &str, htmx: bool) -> ResultResp {
    let screen = loaded::<S>(app, ListScreen::from_query(S::schema(app.page_size), query));
    let table = table_fragment::<S>(&screen);

    if htmx {
        return html_response(table);
    }

    let page = list_page(S::TITLE, S::PATH, screen.schema(), screen.state(), table);
    if screen.error().is_some() {
        html_response_with_status(502, page)
    } else {
        html_response(page)
    }
}

/// `GET /{resource}/export.xlsx`: the filtered, sorted view, unpaginated.
pub fn export<S: Screen>(app: &App, query: &str) -> ResultResp {
    let mut screen = ListScreen::from_query(S::schema(app.page_size), query);
    let ticket = screen.begin_fetch();
    // A failed fetch has nothing to export; surface it as a 502.
    let records = S::fetch(app.api.as_ref())?;
    screen.complete_fetch(ticket, Ok(records));

    let rows = screen.sorted_all();
    export_view_xlsx(&rows, &S::export_columns(), screen.schema().name)
}

/// Response after a toggle: htmx gets the refreshed table and the URL of
/// the reset state, plain forms get a redirect to the list.
pub fn refreshed<S: Screen>(app: &App, htmx: bool) -> ResultResp {
    if !htmx {
        return redirect(S::PATH);
    }

    let mut screen = ListScreen::new(S::schema(app.page_size));
    let ticket = screen.after_status_change();
    screen.complete_fetch(ticket, S::fetch(app.api.as_ref()));

    let url = screen.state().href(S::PATH);
    html_fragment_pushing(table_fragment::<S>(&screen), &url)
}

/// `/{resource}/{id}` style path segment.
pub fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ServerError::NotFound)
}
