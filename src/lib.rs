//! notesite - Browse and search a personal MDX note site from the terminal
//!
//! This library provides the content pipeline behind the `notesite` binary. The
//! site keeps its writing as `.mdx` files under `content/` and ships a JSON
//! search index from `public/search-index.json`; this crate reproduces that
//! pipeline and adds a terminal browser on top. It supports:
//!
//! - Parsing YAML front matter from `.mdx` note files
//! - Building the search index the site serves to browsers
//! - Grouping published notes into a month-by-month timeline
//! - Filtering indexed content for the Ctrl+K search palette
//!
//! # Example
//!
//! ```no_run
//! use notesite::build_index;
//! use std::path::PathBuf;
//!
//! let site_dir = PathBuf::from("/Users/alice/blog");
//! let index = build_index(&site_dir)?;
//! println!("Indexed {} items", index.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod content;
pub mod indexer;
pub mod models;
pub mod search;
pub mod timeline;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use indexer::build_index;
pub use models::{ContentItem, Note};
pub use search::{SearchSession, filter_items};
pub use timeline::{group_by_month, sort_descending};
pub use utils::{encode_url, format_path_with_tilde};
