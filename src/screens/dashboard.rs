use tracing::warn;

use crate::app::App;
use crate::responses::{html_response, ResultResp};
use crate::templates::pages::dashboard::DashboardTile;
use crate::templates::pages::{dashboard_page, DashboardVm};

fn count<T, E: std::fmt::Display>(label: &'static str, result: Result<Vec<T>, E>) -> Option<usize> {
    match result {
        Ok(rows) => Some(rows.len()),
        Err(e) => {
            warn!(resource = label, error = %e, "dashboard count unavailable");
            None
        }
    }
}

/// `GET /`: one tile per resource. A failing resource doesn't sink the page.
pub fn show(app: &App) -> ResultResp {
    let api = app.api.as_ref();
    let vm = DashboardVm {
        tiles: vec![
            DashboardTile {
                label: "Users",
                href: "/users",
                count: count("users", api.list_users()),
            },
            DashboardTile {
                label: "Offers",
                href: "/offers",
                count: count("offers", api.list_posts()),
            },
            DashboardTile {
                label: "Reservations",
                href: "/reservations",
                count: count("reservations", api.list_reservations()),
            },
            DashboardTile {
                label: "Categories",
                href: "/categories",
                count: count("categories", api.list_categories()),
            },
        ],
    };

    html_response(dashboard_page(&vm))
}
