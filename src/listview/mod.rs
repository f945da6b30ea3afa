//! Client-side list presentation: search, filter, sort and paginate an
//! in-memory record collection for one table screen.

pub mod engine;
pub mod query;
pub mod schema;
pub mod sort_key;
pub mod state;

pub use engine::{compute, sorted_all, total_pages, DerivedView};
pub use schema::ListSchema;
pub use sort_key::{SortDirection, SortKey};
pub use state::{ListState, STATUS_FILTER, TYPE_FILTER};
