use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    pub title: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One entry of the site's search index (`public/search-index.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub metadata: ItemMetadata,
}

/// Parse a content date (`YYYY-MM-DD`) as an ISO calendar date.
///
/// Content dates carry no time or timezone, so a note dated `2024-03-05`
/// belongs to March regardless of where the tool runs.
pub fn parse_pub_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
