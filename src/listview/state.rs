// src/listview/state.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::listview::sort_key::SortDirection;

pub const STATUS_FILTER: &str = "status";
pub const TYPE_FILTER: &str = "type";

/// Sentinel a filter select sends for "no filter".
pub const ALL: &str = "all";

/// Transient view state for one table screen.
///
/// Owned by the screen and passed by reference into `compute`; the four
/// mutators below are the only way it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub(super) page: usize,
    pub(super) page_size: usize,
    pub(super) search_term: String,
    pub(super) filters: BTreeMap<String, String>,
    pub(super) sort_field: String,
    pub(super) sort_direction: SortDirection,
}

impl ListState {
    pub fn new(page_size: usize, sort_field: &str, sort_direction: SortDirection) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search_term: String::new(),
            filters: BTreeMap::new(),
            sort_field: sort_field.to_string(),
            sort_direction,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_field(&self) -> &str {
        &self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    pub fn filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn apply_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// `""` and `"all"` clear the filter.
    pub fn apply_filter(&mut self, name: &str, value: &str) {
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            self.filters.remove(name);
        } else {
            self.filters.insert(name.to_string(), value.to_string());
        }
        self.page = 1;
    }

    pub fn request_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field.to_string();
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn go_to_page(&mut self, n: usize, total_pages: usize) {
        self.page = n.clamp(1, total_pages.max(1));
    }

    pub fn clamp_page(&mut self, total_pages: usize) {
        self.go_to_page(self.page, total_pages);
    }
}
