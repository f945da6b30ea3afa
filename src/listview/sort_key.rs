// src/listview/sort_key.rs
use chrono::NaiveDateTime;
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;

use crate::domain::dates::parse_api_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_query(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn from_query(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// A typed value pulled out of a record by a column accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Date(NaiveDateTime),
    Missing,
}

impl<'a> SortKey<'a> {
    pub fn text(value: &'a str) -> Self {
        SortKey::Text(Cow::Borrowed(value))
    }

    pub fn opt_text(value: Option<&'a str>) -> Self {
        value.map(SortKey::text).unwrap_or(SortKey::Missing)
    }

    pub fn number(value: impl Into<f64>) -> Self {
        SortKey::Number(value.into())
    }

    /// API timestamps arrive as strings; anything we can't parse still sorts as text.
    pub fn date(raw: &'a str) -> Self {
        match parse_api_date(raw) {
            Some(ts) => SortKey::Date(ts),
            None if raw.trim().is_empty() => SortKey::Missing,
            None => SortKey::text(raw),
        }
    }

    pub fn opt_date(raw: Option<&'a str>) -> Self {
        raw.map(SortKey::date).unwrap_or(SortKey::Missing)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SortKey::Missing)
    }

    // Mixed kinds still need a total order.
    fn kind_rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Missing => 3,
        }
    }
}

thread_local! {
    // Spanish collation, built from compiled data once per worker thread.
    static COLLATOR: Option<Collator> =
        Collator::try_new(&locale!("es").into(), CollatorOptions::new()).ok();
}

fn folded_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Unicode collation, raw code points as the tie-break so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let collated = COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => folded_cmp(a, b),
    });

    collated.then_with(|| a.cmp(b))
}

fn compare_present(a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
        (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => locale_cmp(x, y),
        _ => a.kind_rank().cmp(&b.kind_rank()),
    }
}

/// Compare two keys in the given direction. Missing values always go last.
pub fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>, direction: SortDirection) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Ascending => compare_present(a, b),
            SortDirection::Descending => compare_present(b, a),
        },
    }
}
