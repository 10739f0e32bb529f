//! Query matching over content items
//!
//! The palette uses plain case-insensitive substring matching, the same
//! behavior the site's command palette has in the browser. Matching considers
//! the item title and its tags; descriptions are shown in results but are not
//! searched.

use crate::models::ContentItem;

/// The text an item is matched against: title and tags, space-joined.
pub fn searchable_text(item: &ContentItem) -> String {
    let mut text = item.metadata.title.clone();
    for tag in &item.metadata.tags {
        text.push(' ');
        text.push_str(tag);
    }
    text
}

/// Filter items by a query string.
///
/// An empty query returns every item in input order. Otherwise an item
/// matches when the lowercased query is a substring of its lowercased
/// searchable text.
pub fn filter_items<'a>(items: &'a [ContentItem], query: &str) -> Vec<&'a ContentItem> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| searchable_text(item).to_lowercase().contains(&needle))
        .collect()
}

/// Group filtered results by item kind, preserving encounter order.
///
/// The first item of a new kind decides where that kind's section appears,
/// and items keep their relative order within each section. Returns a Vec
/// rather than a map so section order survives.
pub fn group_by_kind<'a>(items: &[&'a ContentItem]) -> Vec<(String, Vec<&'a ContentItem>)> {
    let mut groups: Vec<(String, Vec<&'a ContentItem>)> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|(kind, _)| *kind == item.kind) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((item.kind.clone(), vec![item])),
        }
    }

    groups
}
