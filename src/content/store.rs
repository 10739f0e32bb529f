//! Filesystem-backed note loading
//!
//! A [`NoteStore`] wraps one content directory (for example `content/notes/`)
//! and turns the `.mdx` files inside it into [`Note`] values. Slugs mirror the
//! file layout: `content/notes/react-hooks.mdx` has slug `react-hooks`, and a
//! nested `content/notes/2024/retro.mdx` has slug `2024/retro`.
//!
//! # Error Handling Strategy
//!
//! Loading a single note is strict: a missing front matter block, an empty
//! title, or a publication date that is not `YYYY-MM-DD` is an error for that
//! file. Bulk loading is tolerant: `load_all` warns on stderr and skips files
//! that fail to load, so one malformed draft cannot take down the whole
//! timeline. If more than half of the discovered files fail, the store assumes
//! the directory is not actually a notes tree and returns an error instead of
//! a mostly-empty result.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::content::frontmatter::{parse_front_matter, split_front_matter};
use crate::models::{Note, parse_pub_date};
use crate::utils::validate_file_size;

/// Loads notes from a single content directory.
pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The content directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether the content directory exists on disk.
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// List the slugs of every `.mdx` file under the content directory.
    ///
    /// Slugs are relative paths without the extension, `/`-joined regardless
    /// of platform, sorted lexicographically for deterministic output. A
    /// missing directory yields an empty list rather than an error so that
    /// optional content sections can be probed without special-casing.
    pub fn list_slugs(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut slugs = Vec::new();
        for entry in WalkDir::new(&self.dir).follow_links(false) {
            let entry = entry.with_context(|| {
                format!("Failed to scan content directory: {}", self.dir.display())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("mdx") {
                continue;
            }

            let Ok(relative) = path.strip_prefix(&self.dir) else {
                continue;
            };
            let without_ext = relative.with_extension("");
            let slug = without_ext
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            slugs.push(slug);
        }

        slugs.sort();
        Ok(slugs)
    }

    /// Load a single note by slug.
    pub fn load(&self, slug: &str) -> Result<Note> {
        let path = self.dir.join(format!("{}.mdx", slug));

        let mut file = File::open(&path)
            .with_context(|| format!("Failed to open note file: {}", path.display()))?;

        // Size check on the open handle, so a file swapped in after the
        // check cannot bypass the limit.
        validate_file_size(&file, &path)?;

        let mut raw = String::new();
        file.read_to_string(&mut raw)
            .with_context(|| format!("Failed to read note file: {}", path.display()))?;

        let (front, body) = split_front_matter(&raw).with_context(|| {
            format!("Missing front matter block in {}", path.display())
        })?;
        let metadata = parse_front_matter(front);

        if metadata.title.is_empty() {
            bail!("Missing title in front matter of {}", path.display());
        }
        if parse_pub_date(&metadata.date).is_none() {
            bail!(
                "Invalid publication date {:?} in {} (expected YYYY-MM-DD)",
                metadata.date,
                path.display()
            );
        }

        Ok(Note {
            slug: slug.to_string(),
            metadata,
            content: body.to_string(),
        })
    }

    /// Load every note under the content directory, newest first.
    ///
    /// Individual files that fail to load are skipped with a warning. Returns
    /// an error only if more than half of the discovered files fail, which
    /// usually means the directory is not a notes tree at all.
    pub fn load_all(&self) -> Result<Vec<Note>> {
        let slugs = self.list_slugs()?;

        let mut notes = Vec::with_capacity(slugs.len());
        let mut failed = 0usize;

        for slug in &slugs {
            match self.load(slug) {
                Ok(note) => notes.push(note),
                Err(e) => {
                    failed += 1;
                    eprintln!("Warning: Skipping note '{}': {:#}", slug, e);
                }
            }
        }

        let attempted = slugs.len();
        if attempted > 0 {
            let failure_rate = failed as f64 / attempted as f64;
            if failure_rate > 0.5 {
                bail!(
                    "More than half of the note files failed to load ({}/{} failed) in {}",
                    failed,
                    attempted,
                    self.dir.display()
                );
            }
        }

        // Newest first. The sort is stable, so notes sharing a date keep
        // their slug order from list_slugs.
        notes.sort_by(|a, b| {
            let date_a = parse_pub_date(&a.metadata.date);
            let date_b = parse_pub_date(&b.metadata.date);
            date_b.cmp(&date_a)
        });

        Ok(notes)
    }

    /// Load all notes that are not marked `draft: true`, newest first.
    pub fn published(&self) -> Result<Vec<Note>> {
        let notes = self.load_all()?;
        Ok(notes.into_iter().filter(|n| !n.metadata.draft).collect())
    }
}
