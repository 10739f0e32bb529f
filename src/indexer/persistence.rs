//! Index persistence: load/save `public/search-index.json` with atomic writes
//!
//! The index file is the exact JSON array the site serves to the browser, so
//! the format is pretty-printed and field names follow the frontend's schema
//! (`type`, not `kind`). Writes go through a temp file plus rename so a dev
//! server watching `public/` never reads a half-written index.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::ContentItem;

const INDEX_FILENAME: &str = "search-index.json";

/// Path of the generated index inside a site checkout.
pub fn index_path(site_dir: &Path) -> PathBuf {
    site_dir.join("public").join(INDEX_FILENAME)
}

/// Load the generated index if one exists.
///
/// Returns `None` when the file is missing (caller should fall back to a
/// live content scan). A present but unreadable or malformed index is an
/// error; regenerating with `notesite index` fixes it.
pub fn load_index(site_dir: &Path) -> Result<Option<Vec<ContentItem>>> {
    let path = index_path(site_dir);
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read search index: {}", path.display()))?;
    let items: Vec<ContentItem> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse search index: {}", path.display()))?;

    Ok(Some(items))
}

/// Save the index atomically (temp file + rename), creating `public/` if
/// needed. Returns the path written.
pub fn save_index(site_dir: &Path, items: &[ContentItem]) -> Result<PathBuf> {
    let path = index_path(site_dir);
    let parent = path
        .parent()
        .context("Search index path has no parent directory")?;
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;

    let json = serde_json::to_string_pretty(items).context("Failed to serialize search index")?;

    let temp_path = parent.join(format!("{}.tmp", INDEX_FILENAME));
    fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write index temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, &path)
        .with_context(|| format!("Failed to rename index temp file to: {}", path.display()))?;

    Ok(path)
}
