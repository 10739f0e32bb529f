/// Front matter fields of a note file.
///
/// `draft` never reaches the search index or the timeline; it only decides
/// whether the note is published at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMetadata {
    pub title: String,
    pub date: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub draft: bool,
}

/// A fully loaded note: slug, parsed front matter and the MDX body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub slug: String,
    pub metadata: NoteMetadata,
    pub content: String,
}
