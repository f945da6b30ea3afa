use maud::{html, Markup};

pub mod error;
pub mod forms;
pub mod table;

pub use error::fetch_error;

/// Small inline form that POSTs to `action`. With htmx loaded it swaps
/// `target` instead of following the redirect.
pub fn post_button(action: &str, label: &str, target: Option<&str>) -> Markup {
    html! {
        form action=(action) method="post" style="display: inline; margin: 0;" {
            @if let Some(target) = target {
                button type="submit" class="btn"
                    hx-post=(action)
                    hx-target=(target)
                    hx-swap="outerHTML"
                { (label) }
            } @else {
                button type="submit" class="btn" { (label) }
            }
        }
    }
}

/// Two-column definition list used on detail pages.
pub fn detail_list(rows: &[(&str, String)]) -> Markup {
    html! {
        dl class="details" {
            @for (label, value) in rows {
                dt { (label) }
                dd { (value) }
            }
        }
    }
}

pub fn image(src: &str, alt: &str) -> Markup {
    html! {
        img src=(src) alt=(alt) loading="lazy"
            style="max-width: 100%; max-height: 360px; object-fit: cover; border-radius: 8px;";
    }
}

pub fn gallery(title: &str, srcs: &[String]) -> Markup {
    html! {
        @if !srcs.is_empty() {
            section class="card gallery" {
                h2 { (title) }
                div style="display: flex; flex-wrap: wrap; gap: 10px;" {
                    @for (i, src) in srcs.iter().enumerate() {
                        a href=(src) target="_blank" {
                            img src=(src) alt=(format!("Image {}", i + 1)) loading="lazy"
                                style="width: 200px; height: 140px; object-fit: cover; border-radius: 6px;";
                        }
                    }
                }
            }
        }
    }
}

/// Status pill, coloured by value.
pub fn badge(status: &str) -> Markup {
    let colour = match status {
        "verified" | "active" | "approved" | "completed" | "published" => "#10b981",
        "unverified" | "inactive" | "canceled" => "#dc2626",
        _ => "#6b7280",
    };
    html! {
        span class="badge" style=(format!("color: {colour}; font-weight: 600;")) {
            @if status.is_empty() { "—" } @else { (status) }
        }
    }
}
