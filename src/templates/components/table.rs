// Table screen building blocks: search/filter controls, sortable headers,
// pagination. Every link carries the full ListState so it also works
// without htmx.
use maud::{html, Markup};

use crate::listview::query::{DIR_KEY, SEARCH_KEY, SORT_KEY};
use crate::listview::{DerivedView, ListSchema, ListState, SortDirection};
use crate::templates::components::fetch_error;

pub const TABLE_ID: &str = "list-table";
const CONTROLS_ID: &str = "list-controls";

fn table_target() -> String {
    format!("#{TABLE_ID}")
}

/// Link that swaps the table fragment and pushes the new URL.
fn swap_link(href: &str, label: Markup) -> Markup {
    html! {
        a href=(href)
            hx-get=(href)
            hx-target=(table_target())
            hx-swap="outerHTML"
            hx-push-url="true"
        { (label) }
    }
}

fn sort_indicator(state: &ListState, column: &str) -> &'static str {
    if state.sort_field() != column {
        return "";
    }
    match state.sort_direction() {
        SortDirection::Ascending => " ▲",
        SortDirection::Descending => " ▼",
    }
}

/// Search box and filter selects. Sort/dir travel as hidden inputs that
/// live inside the table fragment (`form=` attribute) so they stay current.
pub fn list_controls<R>(base: &str, schema: &ListSchema<R>, state: &ListState) -> Markup {
    html! {
        form id=(CONTROLS_ID) class="list-controls" action=(base) method="get"
            hx-get=(base)
            hx-target=(table_target())
            hx-swap="outerHTML"
            hx-push-url="true"
            hx-trigger="submit, change, keyup changed delay:300ms from:input[name=q]"
            style="display: flex; gap: 10px; align-items: center; margin-bottom: 1rem;"
        {
            @if schema.is_searchable() {
                input type="search" name=(SEARCH_KEY) value=(state.search_term())
                    placeholder="Search..."
                    style="padding: 8px; min-width: 240px;";
            }
            @for filter in &schema.filters {
                label {
                    (filter.label) " "
                    select name=(filter.name) style="padding: 8px;" {
                        option value="all" selected[state.filter(filter.name).is_none()] { "All" }
                        @for (value, label) in filter.options {
                            option value=(value) selected[state.filter(filter.name) == Some(*value)] { (label) }
                        }
                    }
                }
            }
            noscript { button type="submit" class="btn" { "Apply" } }
        }
    }
}

fn header_row<R>(base: &str, schema: &ListSchema<R>, state: &ListState) -> Markup {
    html! {
        tr {
            @for column in &schema.columns {
                th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" {
                    (swap_link(
                        &state.with_sort(column.id).href(base),
                        html! { (column.label) (sort_indicator(state, column.id)) },
                    ))
                }
            }
            th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Actions" }
        }
    }
}

pub fn pagination<R>(base: &str, state: &ListState, view: &DerivedView<'_, R>) -> Markup {
    html! {
        nav class="pagination" style="display: flex; gap: 1rem; align-items: center; margin-top: 1rem;" {
            @if view.has_prev() {
                (swap_link(&state.with_page(view.page - 1, view.total_pages).href(base), html! { "← Previous" }))
            } @else {
                span class="disabled" { "← Previous" }
            }
            span class="page-status" { "Page " (view.page) " of " (view.total_pages) }
            @if view.has_next() {
                (swap_link(&state.with_page(view.page + 1, view.total_pages).href(base), html! { "Next →" }))
            } @else {
                span class="disabled" { "Next →" }
            }
            span style="color: #6b7280;" {
                "Showing " (view.first_index()) "–" (view.last_index())
                " of " (view.filtered_count)
                @if view.filtered_count != view.total_count {
                    " (filtered from " (view.total_count) ")"
                }
            }
        }
    }
}

/// The swappable fragment: table, pagination, export link.
/// `row` renders one `<tr>` with a cell per schema column plus actions.
pub fn data_table<R>(
    base: &str,
    schema: &ListSchema<R>,
    state: &ListState,
    view: &DerivedView<'_, R>,
    row: fn(&R) -> Markup,
) -> Markup {
    let columns = schema.columns.len() + 1;
    let export_href = format!("{base}/export.xlsx?{}", state.to_query());

    html! {
        div id=(TABLE_ID) {
            input type="hidden" form=(CONTROLS_ID) name=(SORT_KEY) value=(state.sort_field());
            input type="hidden" form=(CONTROLS_ID) name=(DIR_KEY) value=(state.sort_direction().as_query());

            div style="overflow-x: auto;" {
                table class="data-table" style="width: 100%; border-collapse: collapse;" {
                    thead { (header_row(base, schema, state)) }
                    tbody {
                        @if view.is_empty() {
                            tr { td colspan=(columns) style="padding: 1rem; text-align: center; color: #6b7280;" { "No records found." } }
                        } @else {
                            @for item in &view.items {
                                (row(item))
                            }
                        }
                    }
                }
            }
            (pagination(base, state, view))
            p { a href=(export_href) class="btn" { "Export to Excel" } }
        }
    }
}

/// Same fragment id as `data_table`, so a retry swaps back in place.
pub fn failed_table(message: &str, retry_href: &str) -> Markup {
    html! {
        div id=(TABLE_ID) { (fetch_error(message, retry_href)) }
    }
}
