use chrono::{DateTime, NaiveDate};

/// Normalize a wire date string to a calendar date-key.
///
/// The portal is inconsistent about date formats: some endpoints return full
/// RFC3339 timestamps, others return bare `YYYY-MM-DD` strings. Either way
/// the time-of-day is discarded - a date-key is the calendar date only.
pub fn parse_date_key(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    // Bare date, possibly with a trailing time we don't care about
    let prefix: String = raw.chars().take(10).collect();
    NaiveDate::parse_from_str(&prefix, "%Y-%m-%d").ok()
}

/// Format a wire date string for display, e.g. "Jan 02, 2025".
/// Falls back to the raw string (truncated to the date part) if unparseable.
pub fn format_date(date: &str) -> String {
    match parse_date_key(date) {
        Some(d) => d.format("%b %d, %Y").to_string(),
        None if date.len() >= 10 => date.chars().take(10).collect(),
        None => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_date_key_rfc3339() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(parse_date_key("2025-01-02T18:30:00+05:30"), Some(expected));
        assert_eq!(parse_date_key("2025-01-02T00:00:00Z"), Some(expected));
    }

    #[test]
    fn test_parse_date_key_bare_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(parse_date_key("2025-01-02"), Some(expected));
        // SQL-style datetime without timezone
        assert_eq!(parse_date_key("2025-01-02 10:15:00"), Some(expected));
    }

    #[test]
    fn test_parse_date_key_garbage() {
        assert_eq!(parse_date_key(""), None);
        assert_eq!(parse_date_key("next tuesday"), None);
        assert_eq!(parse_date_key("2025-13-40"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-02"), "Jan 02, 2025");
        assert_eq!(format_date("2025-01-02T18:30:00Z"), "Jan 02, 2025");
        assert_eq!(format_date("unknown"), "unknown");
    }
}
