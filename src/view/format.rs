use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

static SHA_IN_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-f0-9]{7,40}").expect("valid SHA pattern"));

/// `Jun 1, 2024` style date, or `Unknown date`.
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Unknown date".to_string(),
    }
}

/// First run of 7 to 40 hex digits in a download URL.
///
/// Only a fallback for entries whose release did not carry a commit.
pub fn sha_from_url(url: &str) -> Option<&str> {
    SHA_IN_URL.find(url).map(|m| m.as_str())
}

/// `{version} ({date})`, the label of one selectable option.
pub fn option_label(version: &str, date: Option<&DateTime<Utc>>) -> String {
    format!("{} ({})", version, format_date(date))
}
