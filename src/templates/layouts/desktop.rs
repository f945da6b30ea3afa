use maud::{html, Markup, DOCTYPE};

const NAV: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/users", "Users"),
    ("/offers", "Offers"),
    ("/reservations", "Reservations"),
    ("/categories", "Categories"),
];

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const STYLE: &str = "body { font-family: system-ui, sans-serif; margin: 0; } \
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px #0002; } \
nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; } \
nav a.active { font-weight: bold; } \
.container { max-width: 1200px; margin: 0 auto; padding: 1rem 1.5rem; } \
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; } \
.details { display: grid; grid-template-columns: max-content 1fr; gap: 0.4rem 1.5rem; } \
.details dt { font-weight: 600; color: #374151; } \
.details dd { margin: 0; }";

/// `active` is the nav path to highlight.
pub fn desktop_layout(title: &str, active: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Back office" }
                script src=(HTMX_SRC) defer {}
                style { (STYLE) }
            }
            body {
                header {
                    h3 { "Back office" }
                    nav {
                        ul {
                            @for (href, label) in NAV {
                                li {
                                    a href=(href) class=[(*href == active).then_some("active")] { (label) }
                                }
                            }
                        }
                    }
                }
                main class="container" {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}
