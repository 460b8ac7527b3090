use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display format for transaction dates: `"Apr 03, 2022"`.
const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Parse a transaction `date` field as a calendar date.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps (the date in the timestamp's
/// own offset), and naive `YYYY-MM-DDTHH:MM:SS` timestamps.
pub fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|ts| ts.date())
        .ok()
}

/// Format a calendar date for display.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format a transaction `date` field as `"MMM DD, YYYY"`.
///
/// Input that is not a recognisable date is shown as-is.
pub fn format_date(raw: &str) -> String {
    match parse_transaction_date(raw) {
        Some(date) => format_calendar_date(date),
        None => raw.trim().to_string(),
    }
}

/// Value for an `<input type="date">`.
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_dates() {
        assert_eq!(format_date("2022-04-03"), "Apr 03, 2022");
        assert_eq!(format_date("2023-12-25"), "Dec 25, 2023");
        assert_eq!(format_date("2022-03-31"), "Mar 31, 2022");
    }

    #[test]
    fn test_format_timestamps() {
        assert_eq!(format_date("2022-04-03T10:30:00.000Z"), "Apr 03, 2022");
        assert_eq!(format_date("2022-04-03T23:30:00-05:00"), "Apr 03, 2022");
        assert_eq!(format_date("2022-04-03T08:15:00"), "Apr 03, 2022");
    }

    #[test]
    fn test_malformed_date_shown_raw() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(" 2022-13-40 "), "2022-13-40");
        assert_eq!(parse_transaction_date(""), None);
    }

    #[test]
    fn test_input_value_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        assert_eq!(to_input_value(date), "2025-06-12");
        assert_eq!(parse_transaction_date(&to_input_value(date)), Some(date));
    }
}
