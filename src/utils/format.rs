//! Formatting utilities for long listings.

use chrono::NaiveDateTime;

/// Format a size right-aligned to width 5 (`"   42"`).
pub fn format_size(size: usize) -> String {
    format!("{:>5}", size)
}

/// Format a timestamp for `ls -l` (e.g. `"Oct 17 9:05"`).
///
/// Day and hour are unpadded; minutes always take two digits.
pub fn format_listing_date(time: &NaiveDateTime) -> String {
    time.format("%b %-d %-H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(42), "   42");
        assert_eq!(format_size(4096), " 4096");
        assert_eq!(format_size(123456), "123456");
        assert_eq!(format_size(0), "    0");
    }

    #[test]
    fn test_format_listing_date() {
        let time = NaiveDate::from_ymd_opt(2024, 10, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_listing_date(&time), "Oct 7 9:05");

        let time = NaiveDate::from_ymd_opt(2024, 1, 17)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(format_listing_date(&time), "Jan 17 23:59");
    }
}
