use maud::{html, Markup, DOCTYPE};

/// Standalone error page. Kept outside the main layout so it still renders
/// when the layout's own data can't be loaded.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "h1 { font-size: 2rem; margin-bottom: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to dashboard" } }
            }
        }
    }
}

/// Inline banner for a list whose fetch failed.
pub fn fetch_error(message: &str, retry_href: &str) -> Markup {
    html! {
        div class="card error" role="alert" style="border-left: 4px solid #dc2626; padding: 1rem;" {
            p style="color: #dc2626; font-weight: bold; margin: 0 0 0.5rem 0;" { "Could not load data" }
            p style="margin: 0 0 0.5rem 0;" { (message) }
            a href=(retry_href) { "Retry" }
        }
    }
}
