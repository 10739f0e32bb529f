//! Data models for site content and the search index.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Note`] / [`NoteMetadata`] - MDX notes parsed from `content/`
//! - [`ContentItem`] / [`ItemMetadata`] - Entries of `public/search-index.json`
//!
//! `ContentItem` round-trips the JSON the site ships (its `kind` field is
//! serialized as `"type"`). Dates stay `YYYY-MM-DD` strings end to end;
//! [`parse_pub_date`] is the single place they are interpreted.

pub mod item;
pub mod note;

pub use item::{ContentItem, ItemMetadata, parse_pub_date};
pub use note::{Note, NoteMetadata};
