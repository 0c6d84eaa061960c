//! Display formatting for content dates.
//!
//! Content carries ISO dates (`2024-03-15`) or full RFC 3339 timestamps.
//! Anything that parses as neither is shown as written.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(ts.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Long form used on service pages: `15 March 2024`.
pub fn format_long_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Short form used on publications: `Fri Mar 15 2024`.
pub fn format_post_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%a %b %d %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        assert_eq!(format_long_date("2024-03-15"), "15 March 2024");
        assert_eq!(format_long_date("2024-03-05T09:30:00Z"), "5 March 2024");
        assert_eq!(format_long_date("2024-03-05T09:30:00"), "5 March 2024");
    }

    #[test]
    fn test_post_date() {
        assert_eq!(format_post_date("2024-03-01"), "Fri Mar 01 2024");
    }

    #[test]
    fn test_unparsable_kept() {
        assert_eq!(format_long_date("Spring 2024"), "Spring 2024");
        assert_eq!(format_post_date(""), "");
    }
}
