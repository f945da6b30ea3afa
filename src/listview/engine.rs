// src/listview/engine.rs
use crate::listview::schema::ListSchema;
use crate::listview::sort_key::compare_keys;
use crate::listview::state::ListState;

/// One page worth of records plus the numbers needed to draw pagination.
#[derive(Debug, PartialEq)]
pub struct DerivedView<'r, R> {
    pub items: Vec<&'r R>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
}

impl<R> DerivedView<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first shown record, 0 when nothing is shown.
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }
}

pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size.max(1)).max(1)
}

fn matches_search<R>(schema: &ListSchema<R>, record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    schema
        .searchable
        .iter()
        .filter_map(|field| field(record))
        .any(|value| value.to_lowercase().contains(needle))
}

fn matches_filters<R>(schema: &ListSchema<R>, record: &R, state: &ListState) -> bool {
    state.filters().all(|(name, wanted)| match schema.find_filter(name) {
        Some(filter) => (filter.value)(record) == Some(wanted),
        // A filter this screen never declared can't be satisfied.
        None => false,
    })
}

/// Filter then stable-sort, without paginating.
pub fn sorted_all<'r, R>(schema: &ListSchema<R>, records: &'r [R], state: &ListState) -> Vec<&'r R> {
    let needle = state.search_term().to_lowercase();

    let filtered: Vec<&R> = records
        .iter()
        .filter(|r| matches_filters(schema, r, state))
        .filter(|r| matches_search(schema, r, &needle))
        .collect();

    let Some(column) = schema.find_column(state.sort_field()) else {
        return filtered;
    };

    let direction = state.sort_direction();
    let mut keyed: Vec<_> = filtered.into_iter().map(|r| ((column.key)(r), r)).collect();
    // sort_by is stable, ties keep fetch order
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, direction));

    keyed.into_iter().map(|(_, r)| r).collect()
}

/// Pure: the same records and state always give the same view.
pub fn compute<'r, R>(schema: &ListSchema<R>, records: &'r [R], state: &ListState) -> DerivedView<'r, R> {
    let rows = sorted_all(schema, records, state);

    let page_size = state.page_size();
    let filtered_count = rows.len();
    let total_pages = total_pages(filtered_count, page_size);
    let page = state.page().clamp(1, total_pages);

    let items = rows
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    DerivedView {
        items,
        page,
        page_size,
        total_pages,
        filtered_count,
        total_count: records.len(),
    }
}
