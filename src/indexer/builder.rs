//! Search index construction
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Missing sections**: A site without a `playgrounds/` directory is normal;
//!   the section is skipped with a warning instead of failing the build
//! - **File-level errors**: Malformed notes inside a section are skipped with
//!   warnings by the store's bulk loading
//! - **Failure thresholds**: A section fails if more than 50% of its files
//!   fail to load (systematic breakage, wrong directory)
//! - **User feedback**: A per-section summary is printed to stderr at the end
//!
//! Errors are reported via stderr (eprintln!) and critical failures propagated
//! via Result types.

use std::path::Path;

use anyhow::{Context, Result};

use crate::content::NoteStore;
use crate::models::{ContentItem, ItemMetadata, Note, parse_pub_date};
use crate::utils::encode_url;

/// One publishable content section of the site.
struct Section {
    /// Directory name under `content/`.
    dir: &'static str,
    /// Item kind tag written to the index.
    kind: &'static str,
    /// URL prefix pages of this section publish under.
    url_prefix: &'static str,
}

/// Sections in index order. Note pages live under `/notes/`, playground pages
/// under `/playground/` (the route is singular even though the directory is
/// not).
const SECTIONS: &[Section] = &[
    Section { dir: "notes", kind: "note", url_prefix: "/notes" },
    Section { dir: "playgrounds", kind: "playground", url_prefix: "/playground" },
];

/// Convert a loaded note into its search index entry.
pub fn note_item(note: &Note, kind: &str, url_prefix: &str) -> ContentItem {
    ContentItem {
        kind: kind.to_string(),
        url: encode_url(url_prefix, &note.slug),
        metadata: ItemMetadata {
            title: note.metadata.title.clone(),
            date: note.metadata.date.clone(),
            description: note.metadata.description.clone(),
            tags: note.metadata.tags.clone(),
        },
    }
}

/// Build the search index by scanning every content section.
///
/// Drafts are excluded, and the result is sorted by publication date (newest
/// first) across all sections. This is the same item list the site's command
/// palette consumes, so the output of `save_index` is byte-compatible with
/// what the frontend expects.
///
/// # Arguments
///
/// * `site_dir` - Path to the site checkout containing `content/`
///
/// # Errors
///
/// Returns an error if a section directory exists but most of its files fail
/// to load. Missing section directories are skipped with a warning.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use notesite::build_index;
///
/// let site_dir = PathBuf::from("/Users/alice/blog");
/// let items = build_index(&site_dir)?;
/// println!("Indexed {} items", items.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_index(site_dir: &Path) -> Result<Vec<ContentItem>> {
    let mut items: Vec<ContentItem> = Vec::new();
    let mut section_counts: Vec<(&str, usize)> = Vec::new();

    for section in SECTIONS {
        let store = NoteStore::new(site_dir.join("content").join(section.dir));
        if !store.exists() {
            eprintln!(
                "Warning: Content directory not found, skipping: {}",
                store.dir().display()
            );
            continue;
        }

        let notes = store
            .published()
            .with_context(|| format!("Failed to load '{}' content", section.dir))?;

        section_counts.push((section.dir, notes.len()));
        items.extend(
            notes
                .iter()
                .map(|note| note_item(note, section.kind, section.url_prefix)),
        );
    }

    // Newest first across all sections. The sort is stable, so equal dates
    // keep section order and each store's slug order.
    items.sort_by(|a, b| {
        parse_pub_date(&b.metadata.date).cmp(&parse_pub_date(&a.metadata.date))
    });

    // Print summary statistics
    let breakdown = section_counts
        .iter()
        .map(|(dir, count)| format!("{} {}", count, dir))
        .collect::<Vec<_>>()
        .join(", ");
    if breakdown.is_empty() {
        eprintln!("Indexed 0 items (no content directories found)");
    } else {
        eprintln!("Indexed {} items ({})", items.len(), breakdown);
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use crate::models::NoteMetadata;

    use super::*;

    fn write_content(site: &Path, section: &str, slug: &str, body: &str) {
        let path = site
            .join("content")
            .join(section)
            .join(format!("{}.mdx", slug));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    fn front(title: &str, date: &str) -> String {
        format!("---\ntitle: {}\ndate: {}\n---\nBody\n", title, date)
    }

    #[test]
    fn test_note_item_maps_metadata_and_url() {
        let note = Note {
            slug: "react-hooks".to_string(),
            metadata: NoteMetadata {
                title: "React Hooks".to_string(),
                date: "2024-03-10".to_string(),
                description: Some("About hooks".to_string()),
                tags: vec!["react".to_string()],
                draft: false,
            },
            content: "body".to_string(),
        };

        let item = note_item(&note, "note", "/notes");

        assert_eq!(item.kind, "note");
        assert_eq!(item.url, "/notes/react-hooks");
        assert_eq!(item.metadata.title, "React Hooks");
        assert_eq!(item.metadata.date, "2024-03-10");
        assert_eq!(item.metadata.description.as_deref(), Some("About hooks"));
        assert_eq!(item.metadata.tags, vec!["react"]);
    }

    #[test]
    fn test_note_item_encodes_slug() {
        let note = Note {
            slug: "notes with spaces".to_string(),
            metadata: NoteMetadata {
                title: "Spaces".to_string(),
                date: "2024-01-01".to_string(),
                ..Default::default()
            },
            content: String::new(),
        };

        let item = note_item(&note, "note", "/notes");
        assert_eq!(item.url, "/notes/notes%20with%20spaces");
    }

    #[test]
    fn test_build_index_combines_sections() {
        let site = TempDir::new().unwrap();
        write_content(site.path(), "notes", "hooks", &front("React Hooks", "2024-03-10"));
        write_content(
            site.path(),
            "playgrounds",
            "canvas",
            &front("Canvas Toy", "2024-02-01"),
        );

        let items = build_index(site.path()).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, "note");
        assert_eq!(items[0].url, "/notes/hooks");
        assert_eq!(items[1].kind, "playground");
        assert_eq!(items[1].url, "/playground/canvas");
    }

    #[test]
    fn test_build_index_newest_first_across_sections() {
        let site = TempDir::new().unwrap();
        write_content(site.path(), "notes", "older", &front("Older Note", "2024-01-05"));
        write_content(
            site.path(),
            "playgrounds",
            "newest",
            &front("Newest Playground", "2024-03-01"),
        );
        write_content(site.path(), "notes", "middle", &front("Middle Note", "2024-02-10"));

        let items = build_index(site.path()).unwrap();
        let titles: Vec<&str> = items.iter().map(|i| i.metadata.title.as_str()).collect();

        assert_eq!(titles, vec!["Newest Playground", "Middle Note", "Older Note"]);
    }

    #[test]
    fn test_build_index_excludes_drafts() {
        let site = TempDir::new().unwrap();
        write_content(site.path(), "notes", "done", &front("Done", "2024-01-01"));
        write_content(
            site.path(),
            "notes",
            "wip",
            "---\ntitle: WIP\ndate: 2024-02-01\ndraft: true\n---\nBody\n",
        );

        let items = build_index(site.path()).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].metadata.title, "Done");
    }

    #[test]
    fn test_build_index_missing_section_skipped() {
        let site = TempDir::new().unwrap();
        write_content(site.path(), "notes", "only", &front("Only Note", "2024-01-01"));
        // no playgrounds directory at all

        let items = build_index(site.path()).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, "note");
    }

    #[test]
    fn test_build_index_empty_site() {
        let site = TempDir::new().unwrap();
        let items = build_index(site.path()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_build_index_nested_slugs_keep_paths() {
        let site = TempDir::new().unwrap();
        write_content(
            site.path(),
            "notes",
            "2024/retro",
            &front("Retro", "2024-12-28"),
        );

        let items = build_index(site.path()).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "/notes/2024/retro");
    }
}
