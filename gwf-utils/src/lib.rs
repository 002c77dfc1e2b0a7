//! Shared utility functions for groundwater forecast crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate, NaiveDateTime};

    /// Date-only formats accepted in forecast artifacts, tried in order.
    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y"];

    /// Timestamp formats accepted in forecast artifacts; the time part is dropped.
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    /// Last day shown on forecast charts.
    pub fn forecast_horizon() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid horizon date")
    }

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Parse a date the way pandas would for the artifact files we see:
    /// ISO dates, compact dates, US dates, and ISO timestamps.
    pub fn parse_date_flexible(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                return Ok(date);
            }
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(ts.date());
            }
        }
        anyhow::bail!("unrecognized date '{}'", s)
    }

    /// January 1st of every year that falls inside `[start, end]`.
    pub fn yearly_ticks(start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        if start > end {
            return Vec::new();
        }
        let first_year = if start.ordinal() == 1 {
            start.year()
        } else {
            start.year() + 1
        };
        (first_year..=end.year())
            .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_parse_date_flexible() {
            let expected = NaiveDate::from_ymd_opt(2021, 3, 7).unwrap();
            assert_eq!(parse_date_flexible("2021-03-07").unwrap(), expected);
            assert_eq!(parse_date_flexible("20210307").unwrap(), expected);
            assert_eq!(parse_date_flexible("03/07/2021").unwrap(), expected);
            assert_eq!(parse_date_flexible("2021-03-07 00:00:00").unwrap(), expected);
            assert_eq!(parse_date_flexible("2021-03-07T13:45:00").unwrap(), expected);
            assert_eq!(parse_date_flexible(" 2021-03-07 ").unwrap(), expected);
        }

        #[test]
        fn test_parse_date_flexible_rejects_garbage() {
            assert!(parse_date_flexible("yesterday").is_err());
            assert!(parse_date_flexible("").is_err());
            assert!(parse_date_flexible("2021-13-40").is_err());
        }

        #[test]
        fn test_yearly_ticks() {
            let start = NaiveDate::from_ymd_opt(2019, 1, 6).unwrap();
            let ticks = yearly_ticks(&start, &forecast_horizon());
            assert_eq!(ticks.len(), 7);
            assert_eq!(ticks[0], NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
            assert_eq!(ticks[6], NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

            let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            assert_eq!(yearly_ticks(&jan1, &forecast_horizon())[0], jan1);
        }

        #[test]
        fn test_yearly_ticks_empty_when_reversed() {
            let start = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
            assert!(yearly_ticks(&start, &forecast_horizon()).is_empty());
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }
    }
}

/// Small text helpers for labels.
pub mod text {
    /// Uppercase the first character and lowercase the rest ("withams" -> "Withams").
    pub fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

}
