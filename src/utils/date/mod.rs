// Date utility functions
// Calendar-date helpers shared by the canvas, the session and the day panel

use chrono::{Datelike, NaiveDate};

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Returns the date for `(year, month, day)` only if that day exists.
///
/// `month` and `day` are 1-based. Day 30 of February, day 31 of April and
/// friends return `None` instead of rolling over into the next month.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Abbreviated month name for a 1-based month.
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_ABBREVIATIONS.get(index).copied()
}

pub fn weekday_abbreviation(date: NaiveDate) -> &'static str {
    WEEKDAY_ABBREVIATIONS[date.weekday().num_days_from_sunday() as usize]
}

/// English ordinal suffix for a day of the month.
///
/// 11, 12 and 13 always take "th"; otherwise the last digit decides.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn format_ordinal(day: u32) -> String {
    format!("{}{}", day, ordinal_suffix(day))
}

/// Short per-cell header such as `Jan Wed 1st`.
pub fn cell_header_label(date: NaiveDate) -> String {
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    format!(
        "{} {} {}",
        month,
        weekday_abbreviation(date),
        format_ordinal(date.day())
    )
}

/// Parse a `YYYY-MM-DD` key as used by the events map.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT).ok()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Format a date as `Jan 5`.
pub fn format_month_day(date: NaiveDate) -> String {
    format!("{} {}", MONTH_ABBREVIATIONS[date.month0() as usize], date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1, "1st")]
    #[test_case(2, "2nd")]
    #[test_case(3, "3rd")]
    #[test_case(4, "4th")]
    #[test_case(11, "11th")]
    #[test_case(12, "12th")]
    #[test_case(13, "13th")]
    #[test_case(21, "21st")]
    #[test_case(22, "22nd")]
    #[test_case(23, "23rd")]
    #[test_case(30, "30th")]
    #[test_case(31, "31st")]
    fn test_format_ordinal(day: u32, expected: &str) {
        assert_eq!(format_ordinal(day), expected);
    }

    #[test]
    fn test_calendar_date_rejects_missing_days() {
        assert!(calendar_date(2025, 2, 30).is_none());
        assert!(calendar_date(2025, 4, 31).is_none());
        assert!(calendar_date(2025, 2, 29).is_none());
        assert!(calendar_date(2024, 2, 29).is_some());
        assert!(calendar_date(2025, 13, 1).is_none());
    }

    #[test]
    fn test_cell_header_label() {
        // Jan 1, 2025 was a Wednesday
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(cell_header_label(date), "Jan Wed 1st");

        let date = NaiveDate::from_ymd_opt(2025, 3, 22).unwrap();
        assert_eq!(cell_header_label(date), "Mar Sat 22nd");
    }

    #[test]
    fn test_month_abbreviation_bounds() {
        assert_eq!(month_abbreviation(1), Some("Jan"));
        assert_eq!(month_abbreviation(12), Some("Dec"));
        assert_eq!(month_abbreviation(0), None);
        assert_eq!(month_abbreviation(13), None);
    }

    #[test]
    fn test_date_key_round_trip() {
        let date = parse_date_key("2025-07-04").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        assert_eq!(date_key(date), "2025-07-04");
        assert!(parse_date_key("2025-02-30").is_none());
        assert!(parse_date_key("not a date").is_none());
    }

    #[test]
    fn test_format_month_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_month_day(date), "Jan 5");
    }
}
