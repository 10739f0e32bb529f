//! Content loading: front matter parsing and the filesystem note store

pub mod frontmatter;
pub mod store;

pub use frontmatter::{parse_front_matter, split_front_matter};
pub use store::NoteStore;
