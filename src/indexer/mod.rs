//! Search index building and persistence
//!
//! # Error Handling Strategy
//!
//! The indexer combines graceful degradation with error rate tracking:
//!
//! - **Section-level tolerance**: Missing content directories are skipped with
//!   a warning so sites carrying only a subset of sections still index.
//!
//! - **File-level tolerance**: Malformed notes are skipped by the store's bulk
//!   loading, with an error returned only when most of a section fails.
//!
//! - **Summary reporting**: Prints per-section statistics after each build,
//!   giving users visibility into index completeness.
//!
//! - **Atomic persistence**: The generated JSON is written via temp file plus
//!   rename so watchers of `public/` never observe a partial index.

pub mod builder;
pub mod persistence;
pub mod source;

pub use builder::{build_index, note_item};
pub use persistence::{index_path, load_index, save_index};
pub use source::SiteItemSource;
