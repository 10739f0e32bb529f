use chrono::Datelike;

use crate::models::parse_pub_date;

/// Format a `YYYY-MM-DD` publication date the way the site renders dates,
/// e.g. `2024年3月10日`. Unparseable input is returned as-is.
pub fn format_date_ja(date: &str) -> String {
    match parse_pub_date(date) {
        Some(parsed) => format!("{}年{}月{}日", parsed.year(), parsed.month(), parsed.day()),
        None => date.to_string(),
    }
}
