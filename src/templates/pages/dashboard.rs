use crate::templates::desktop_layout;
use maud::{html, Markup};

/// One tile per resource. `count` is `None` when its fetch failed.
pub struct DashboardTile {
    pub label: &'static str,
    pub href: &'static str,
    pub count: Option<usize>,
}

pub struct DashboardVm {
    pub tiles: Vec<DashboardTile>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Dashboard",
        "/",
        html! {
            div class="tiles" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem;" {
                @for tile in &vm.tiles {
                    section class="card tile" {
                        h3 { (tile.label) }
                        @match tile.count {
                            Some(n) => {
                                p class="count" style="font-size: 2rem; font-weight: bold; margin: 0.5rem 0;" { (n) }
                            }
                            None => {
                                p class="count unavailable" style="color: #dc2626;" { "Unavailable" }
                            }
                        }
                        a href=(tile.href) { "Open " (tile.label.to_lowercase()) " →" }
                    }
                }
            }
            p style="margin-top: 1rem;" {
                a href="/categories/create" class="btn" { "New category" }
            }
        },
    )
}
