//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating test site directory structures
pub struct SiteBuilder {
    temp_dir: TempDir,
}

impl SiteBuilder {
    /// Create a new builder with an empty site directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the site directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a note under content/notes/
    pub fn with_note(self, slug: &str, file: &NoteFileBuilder) -> Self {
        self.with_section_file("notes", slug, &file.to_mdx())
    }

    /// Add a playground under content/playgrounds/
    pub fn with_playground(self, slug: &str, file: &NoteFileBuilder) -> Self {
        self.with_section_file("playgrounds", slug, &file.to_mdx())
    }

    /// Add a file with raw contents at content/<section>/<slug>.mdx
    pub fn with_section_file(self, section: &str, slug: &str, contents: &str) -> Self {
        let path =
            self.temp_dir.path().join("content").join(section).join(format!("{}.mdx", slug));
        let parent = path.parent().expect("content path has a parent");
        fs::create_dir_all(parent).expect("Failed to create content dir");
        fs::write(&path, contents).expect("Failed to write content file");
        self
    }

    /// Add a prebuilt search index at public/search-index.json
    pub fn with_search_index(self, json: &str) -> Self {
        let public_dir = self.temp_dir.path().join("public");
        fs::create_dir_all(&public_dir).expect("Failed to create public dir");
        fs::write(public_dir.join("search-index.json"), json)
            .expect("Failed to write search index");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for .mdx note files
pub struct NoteFileBuilder {
    title: String,
    date: String,
    description: Option<String>,
    tags: Vec<String>,
    draft: bool,
    body: String,
}

impl NoteFileBuilder {
    /// Create a new note file with default values
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            date: "2024-03-15".to_string(),
            description: None,
            tags: Vec::new(),
            draft: false,
            body: "Body text.".to_string(),
        }
    }

    /// Set the publication date (YYYY-MM-DD)
    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// Set the description
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the tags
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Mark the note as a draft
    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }

    /// Set the MDX body
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Render the complete .mdx file contents
    pub fn to_mdx(&self) -> String {
        let mut out = String::from("---\n");
        out.push_str(&format!("title: \"{}\"\n", self.title));
        out.push_str(&format!("date: {}\n", self.date));
        if let Some(description) = &self.description {
            out.push_str(&format!("description: {}\n", description));
        }
        if !self.tags.is_empty() {
            out.push_str(&format!("tags: [{}]\n", self.tags.join(", ")));
        }
        if self.draft {
            out.push_str("draft: true\n");
        }
        out.push_str("---\n\n");
        out.push_str(&self.body);
        out.push('\n');
        out
    }
}

/// Helper to create a site with an empty notes directory
pub fn minimal_site() -> TempDir {
    let builder = SiteBuilder::new();
    fs::create_dir_all(builder.path().join("content").join("notes"))
        .expect("Failed to create notes dir");
    builder.build()
}

/// Helper to create a realistic site with sample content
pub fn realistic_site() -> TempDir {
    SiteBuilder::new()
        .with_note(
            "react-hooks",
            &NoteFileBuilder::new("React Hooksの使い方")
                .date("2024-03-20")
                .description("useState と useEffect の解説")
                .tags(&["React", "Hooks"]),
        )
        .with_note(
            "rust-ownership",
            &NoteFileBuilder::new("Rustの所有権").date("2024-03-05").tags(&["Rust"]),
        )
        .with_note(
            "css-grid",
            &NoteFileBuilder::new("CSS Grid入門").date("2024-02-10").tags(&["CSS"]),
        )
        .with_note("secret-wip", &NoteFileBuilder::new("下書きメモ").date("2024-04-01").draft())
        .with_playground(
            "canvas-particles",
            &NoteFileBuilder::new("Canvas Particles").date("2024-01-15").tags(&["Canvas"]),
        )
        .build()
}
