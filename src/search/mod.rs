//! Command palette search: lazy item loading and query filtering

pub mod filter;
pub mod session;

pub use filter::{filter_items, group_by_kind, searchable_text};
pub use session::{ItemSource, Navigator, SearchSession};
