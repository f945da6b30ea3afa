// src/listview/schema.rs
use crate::listview::sort_key::{SortDirection, SortKey};
use crate::listview::state::ListState;

pub const DEFAULT_PAGE_SIZE: usize = 10;

pub type TextAccessor<R> = fn(&R) -> Option<&str>;
pub type KeyAccessor<R> = fn(&R) -> SortKey<'_>;

/// A sortable column header.
pub struct Column<R> {
    pub id: &'static str,
    pub label: &'static str,
    pub key: KeyAccessor<R>,
}

/// An enumerated filter, rendered as a select. `options` are (value, label) pairs.
pub struct Filter<R> {
    pub name: &'static str,
    pub label: &'static str,
    pub options: &'static [(&'static str, &'static str)],
    pub value: TextAccessor<R>,
}

/// What one table screen declares up front: which fields are searchable,
/// which columns sort, which filters exist, and the initial ListState.
pub struct ListSchema<R> {
    pub name: &'static str,
    pub page_size: usize,
    pub default_sort: &'static str,
    pub default_direction: SortDirection,
    pub searchable: Vec<TextAccessor<R>>,
    pub columns: Vec<Column<R>>,
    pub filters: Vec<Filter<R>>,
}

impl<R> ListSchema<R> {
    pub fn new(name: &'static str, default_sort: &'static str, direction: SortDirection) -> Self {
        Self {
            name,
            page_size: DEFAULT_PAGE_SIZE,
            default_sort,
            default_direction: direction,
            searchable: Vec::new(),
            columns: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn search(mut self, field: TextAccessor<R>) -> Self {
        self.searchable.push(field);
        self
    }

    pub fn column(mut self, id: &'static str, label: &'static str, key: KeyAccessor<R>) -> Self {
        self.columns.push(Column { id, label, key });
        self
    }

    pub fn filter(
        mut self,
        name: &'static str,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
        value: TextAccessor<R>,
    ) -> Self {
        self.filters.push(Filter {
            name,
            label,
            options,
            value,
        });
        self
    }

    pub fn find_column(&self, id: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn find_filter(&self, name: &str) -> Option<&Filter<R>> {
        self.filters.iter().find(|f| f.name == name)
    }

    pub fn is_searchable(&self) -> bool {
        !self.searchable.is_empty()
    }

    /// The state a screen starts with on every visit.
    pub fn initial_state(&self) -> ListState {
        ListState::new(self.page_size, self.default_sort, self.default_direction)
    }
}
