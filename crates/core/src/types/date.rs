//! Date parsing and display for spreadsheet date cells.
//!
//! Sheets exports dates as ISO-8601 timestamps when the cell is typed as a
//! date, and as whatever the user typed otherwise. Parsing is best-effort;
//! anything unrecognised is shown verbatim.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Text shown for a missing date.
pub const MISSING_DATE: &str = "N/A";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%b %d, %Y", "%B %d, %Y"];

/// Parse a date cell into a timestamp (UTC for zoned inputs).
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Format a date cell as `Jan 5, 2024`.
///
/// Missing cells render as [`MISSING_DATE`]; unparseable cells are
/// returned unchanged.
#[must_use]
pub fn format_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => MISSING_DATE.to_string(),
        Some(s) => parse_date(s).map_or_else(
            || s.to_string(),
            |dt| dt.format("%b %-d, %Y").to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_timestamp() {
        assert_eq!(
            format_date(Some("2024-01-05T08:30:00.000Z")),
            "Jan 5, 2024"
        );
        assert_eq!(format_date(Some("2024-12-25")), "Dec 25, 2024");
        assert_eq!(format_date(Some("03/14/2023")), "Mar 14, 2023");
    }

    #[test]
    fn test_missing_date_is_na() {
        assert_eq!(format_date(None), MISSING_DATE);
        assert_eq!(format_date(Some("")), MISSING_DATE);
        assert_eq!(format_date(Some("   ")), MISSING_DATE);
    }

    #[test]
    fn test_unparseable_date_is_returned_verbatim() {
        assert_eq!(format_date(Some("next tuesday")), "next tuesday");
    }

    #[test]
    fn test_parse_orders_chronologically() {
        let earlier = parse_date("2024-01-05").expect("date parses");
        let later = parse_date("2024-01-05T10:00:00Z").expect("timestamp parses");
        assert!(later > earlier);
    }
}
