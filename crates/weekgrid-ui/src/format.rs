//! Display formatting for times, dates and the datetime form field.

use chrono::{NaiveDate, NaiveDateTime};

/// Input format of the draft's start/end fields.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Two-digit hour and minute, e.g. `09:05`.
pub fn format_time(time: &NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

/// Short weekday, short month and day, e.g. `Mon Jan 1`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %b %-d").to_string()
}

/// Value for a datetime form field, e.g. `2024-01-03T14:00`.
pub fn format_datetime_local(time: &NaiveDateTime) -> String {
    time.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Parse a datetime form field value. Seconds are accepted but optional.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&sample()), "09:05");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(sample().date()), "Wed Jan 3");
    }

    #[test]
    fn test_format_datetime_local() {
        assert_eq!(format_datetime_local(&sample()), "2024-01-03T09:05");
    }

    #[test]
    fn test_parse_datetime_local() {
        assert_eq!(parse_datetime_local("2024-01-03T09:05"), Some(sample()));
        assert_eq!(parse_datetime_local(" 2024-01-03T09:05:00 "), Some(sample()));
        assert_eq!(parse_datetime_local("2024-01-03"), None);
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("2024-13-03T09:05"), None);
    }
}
