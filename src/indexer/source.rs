//! Palette item source backed by the site checkout
//!
//! Prefers the generated `public/search-index.json` since reading one file is
//! much cheaper than parsing every note, and falls back to a live content
//! scan when no index has been generated yet. Runs on the palette's
//! background load thread, so it holds only the site path.

use std::path::PathBuf;

use anyhow::Result;

use crate::indexer::builder::build_index;
use crate::indexer::persistence::load_index;
use crate::models::ContentItem;
use crate::search::ItemSource;

pub struct SiteItemSource {
    site_dir: PathBuf,
}

impl SiteItemSource {
    pub fn new(site_dir: impl Into<PathBuf>) -> Self {
        Self { site_dir: site_dir.into() }
    }
}

impl ItemSource for SiteItemSource {
    fn list_items(&self) -> Result<Vec<ContentItem>> {
        if let Some(items) = load_index(&self.site_dir)? {
            return Ok(items);
        }
        build_index(&self.site_dir)
    }
}
