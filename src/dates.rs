//! Date parsing and display for content metadata.
//!
//! Front matter carries dates as strings (`"2023-01-01"` or a full RFC 3339
//! timestamp) or as bare TOML dates. Only the calendar date matters anywhere
//! in the pipeline — sitemap `lastmod` values, sort keys, and the inventory
//! display all work on `NaiveDate`.
//!
//! Parsing is tolerant: a value that fails every accepted format yields
//! `None`, and callers decide how to degrade (stable sort order for
//! listings, skip-with-warning for the sitemap).

use chrono::{DateTime, NaiveDate};

/// Parse a date from a metadata field value.
///
/// Accepted formats, tried in order:
/// - plain date: `2023-01-01`
/// - RFC 3339 timestamp: `2023-01-01T10:30:00Z` (offset kept, date taken as written)
/// - timestamp without offset: `2023-01-01T10:30:00`
pub fn parse(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    None
}

/// Format a date for the inventory display: `"January 1, 2023 (2y ago)"`.
///
/// The relative part uses coarse buckets: years, then months, then days,
/// then "Today". `today` is passed in so the formatting stays a pure
/// function of its inputs.
pub fn format_human(date: NaiveDate, today: NaiveDate) -> String {
    let full = date.format("%B %-d, %Y");
    let days = (today - date).num_days().abs();
    let relative = if days / 365 > 0 {
        format!("{}y ago", days / 365)
    } else if days / 30 > 0 {
        format!("{}mo ago", days / 30)
    } else if days > 0 {
        format!("{days}d ago")
    } else {
        "Today".to_string()
    };
    format!("{full} ({relative})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parses_plain_date() {
        assert_eq!(parse("2023-01-01"), Some(d("2023-01-01")));
    }

    #[test]
    fn parses_rfc3339() {
        assert_eq!(parse("2023-06-15T10:30:00Z"), Some(d("2023-06-15")));
        assert_eq!(parse("2023-06-15T10:30:00+02:00"), Some(d("2023-06-15")));
    }

    #[test]
    fn parses_naive_timestamp() {
        assert_eq!(parse("2023-06-15T10:30:00"), Some(d("2023-06-15")));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse("  2023-01-01  "), Some(d("2023-01-01")));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse("yesterday"), None);
        assert_eq!(parse("01/02/2023"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn human_format_years() {
        let out = format_human(d("2023-01-01"), d("2025-06-01"));
        assert_eq!(out, "January 1, 2023 (2y ago)");
    }

    #[test]
    fn human_format_months() {
        let out = format_human(d("2025-03-01"), d("2025-06-01"));
        assert_eq!(out, "March 1, 2025 (3mo ago)");
    }

    #[test]
    fn human_format_days() {
        let out = format_human(d("2025-05-30"), d("2025-06-01"));
        assert_eq!(out, "May 30, 2025 (2d ago)");
    }

    #[test]
    fn human_format_today() {
        let out = format_human(d("2025-06-01"), d("2025-06-01"));
        assert_eq!(out, "June 1, 2025 (Today)");
    }
}
