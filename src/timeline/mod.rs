//! Month grouping for the note timeline
//!
//! The home timeline shows notes bucketed by publication month, newest month
//! first, mirroring the site's archive layout. Grouping happens on demand from
//! an already-loaded item list, so these are pure functions over
//! [`ContentItem`] slices.
//!
//! Group keys are `YYYY-MM` with a zero-padded month, which makes plain
//! lexicographic ordering on keys identical to chronological ordering. Labels
//! are the human-facing form `YYYY年M月` with the month unpadded.

use std::collections::HashMap;

use chrono::Datelike;

use crate::models::{ContentItem, parse_pub_date};

/// One month's worth of timeline entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    /// Display label, e.g. `2024年3月`.
    pub label: String,
    /// Items within the month, in input order.
    pub items: Vec<ContentItem>,
}

/// Group items by publication month.
///
/// Items keep their input order within each group. Items whose date does not
/// parse as `YYYY-MM-DD` are skipped with a warning on stderr rather than
/// being filed under a garbage key; index files normally contain only valid
/// dates, so a skip here points at a hand-edited index.
pub fn group_by_month(items: &[ContentItem]) -> HashMap<String, MonthGroup> {
    let mut groups: HashMap<String, MonthGroup> = HashMap::new();

    for item in items {
        let Some(date) = parse_pub_date(&item.metadata.date) else {
            eprintln!(
                "Warning: Skipping timeline item with unparseable date {:?}: {}",
                item.metadata.date, item.metadata.title
            );
            continue;
        };

        let key = format!("{}-{:02}", date.year(), date.month());
        groups
            .entry(key)
            .or_insert_with(|| MonthGroup {
                label: format!("{}年{}月", date.year(), date.month()),
                items: Vec::new(),
            })
            .items
            .push(item.clone());
    }

    groups
}

/// Order month groups newest first.
///
/// Keys are zero-padded `YYYY-MM`, so descending lexicographic order is
/// descending chronological order.
pub fn sort_descending(groups: HashMap<String, MonthGroup>) -> Vec<(String, MonthGroup)> {
    let mut sorted: Vec<(String, MonthGroup)> = groups.into_iter().collect();
    sorted.sort_by(|a, b| b.0.cmp(&a.0));
    sorted
}
