// src/listview/query.rs
//
// ListState lives in the page URL so every table link is bookmarkable.
use url::form_urlencoded;

use crate::listview::schema::ListSchema;
use crate::listview::sort_key::SortDirection;
use crate::listview::state::ListState;

pub const SEARCH_KEY: &str = "q";
pub const SORT_KEY: &str = "sort";
pub const DIR_KEY: &str = "dir";
pub const PAGE_KEY: &str = "page";

impl ListState {
    /// Rebuild state from a query string. Anything the schema doesn't
    /// declare, or that doesn't parse, leaves the default in place.
    pub fn from_query<R>(schema: &ListSchema<R>, query: &str) -> ListState {
        let mut state = schema.initial_state();
        let mut page = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                SEARCH_KEY => state.apply_search(value.into_owned()),
                SORT_KEY => {
                    if schema.find_column(&value).is_some() {
                        state.sort_field = value.into_owned();
                    }
                }
                DIR_KEY => {
                    if let Some(dir) = SortDirection::from_query(&value) {
                        state.sort_direction = dir;
                    }
                }
                PAGE_KEY => page = value.trim().parse::<usize>().ok(),
                name => {
                    if schema.find_filter(name).is_some() {
                        state.apply_filter(name, &value);
                    }
                }
            }
        }

        // Search/filter reset the page, so it goes last.
        if let Some(p) = page {
            state.page = p.max(1);
        }

        state
    }

    /// Only non-default parts are written, so a fresh screen is a bare path.
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());

        if !self.search_term.is_empty() {
            out.append_pair(SEARCH_KEY, &self.search_term);
        }
        for (name, value) in &self.filters {
            out.append_pair(name, value);
        }
        out.append_pair(SORT_KEY, &self.sort_field);
        out.append_pair(DIR_KEY, self.sort_direction.as_query());
        if self.page > 1 {
            out.append_pair(PAGE_KEY, &self.page.to_string());
        }

        out.finish()
    }

    /// `path?query` for this state.
    pub fn href(&self, path: &str) -> String {
        format!("{path}?{}", self.to_query())
    }

    pub fn with_page(&self, n: usize, total_pages: usize) -> ListState {
        let mut next = self.clone();
        next.go_to_page(n, total_pages);
        next
    }

    pub fn with_sort(&self, field: &str) -> ListState {
        let mut next = self.clone();
        next.request_sort(field);
        next
    }
}
