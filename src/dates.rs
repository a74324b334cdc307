//! Date Helpers
//!
//! Calendar-day strings in the `YYYY-MM-DD` wire form plus the long display
//! form used for list headings.

use chrono::{Local, NaiveDate};

/// Current local calendar date, `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Long display form, e.g. "Monday, January 1, 2024".
/// Unparseable input comes back unchanged.
pub fn long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(day) => day.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        assert_eq!(long_date("2024-01-01"), "Monday, January 1, 2024");
        assert_eq!(long_date("2024-02-29"), "Thursday, February 29, 2024");
    }

    #[test]
    fn test_long_date_day_is_not_zero_padded() {
        assert_eq!(long_date("2024-12-05"), "Thursday, December 5, 2024");
    }

    #[test]
    fn test_long_date_passes_garbage_through() {
        assert_eq!(long_date("not-a-date"), "not-a-date");
        assert_eq!(long_date(""), "");
    }

    #[test]
    fn test_today_is_wire_shaped() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
