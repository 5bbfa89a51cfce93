//! Date parsing for the textual formats used on the listing pages.
//!
//! Each source prints dates in exactly one format and its extractor knows
//! which. There is no cross-format fallback: text that doesn't match the
//! source's format is a parse failure and the block is dropped.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt;

static ORDINAL_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)(st|nd|rd|th)").expect("valid ordinal regex"));

/// The date layouts observed across the source catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `January 05, 2025`
    MonthDayYear,
    /// `05/Jan/2025`
    DaySlashMonthYear,
    /// `March 3rd, 2025`
    OrdinalMonthDayYear,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::MonthDayYear | DateFormat::OrdinalMonthDayYear => "%B %d, %Y",
            DateFormat::DaySlashMonthYear => "%d/%b/%Y",
        }
    }
}

/// Date text that doesn't fit the source's format.
#[derive(Debug)]
pub enum DateParseError {
    Format(chrono::ParseError),
    /// `%B` parsing also accepts `Jan`; the month-name formats require `January`.
    AbbreviatedMonth(String),
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::Format(e) => write!(f, "{e}"),
            DateParseError::AbbreviatedMonth(month) => {
                write!(f, "expected a full month name, found {month:?}")
            }
        }
    }
}

impl Error for DateParseError {}

impl From<chrono::ParseError> for DateParseError {
    fn from(e: chrono::ParseError) -> Self {
        DateParseError::Format(e)
    }
}

/// Parse raw date text using the given format.
///
/// Surrounding whitespace is ignored. For [`DateFormat::OrdinalMonthDayYear`]
/// the `st|nd|rd|th` suffix is stripped from the day before parsing.
pub fn parse_date(raw: &str, format: DateFormat) -> Result<NaiveDate, DateParseError> {
    let trimmed = raw.trim();
    match format {
        DateFormat::DaySlashMonthYear => Ok(NaiveDate::parse_from_str(trimmed, format.pattern())?),
        DateFormat::MonthDayYear => parse_full_month(trimmed, format),
        DateFormat::OrdinalMonthDayYear => {
            let stripped = ORDINAL_SUFFIX.replace_all(trimmed, "$1");
            parse_full_month(&stripped, format)
        }
    }
}

fn parse_full_month(text: &str, format: DateFormat) -> Result<NaiveDate, DateParseError> {
    let date = NaiveDate::parse_from_str(text, format.pattern())?;
    let month = text.split_whitespace().next().unwrap_or_default();
    if !month.eq_ignore_ascii_case(&date.format("%B").to_string()) {
        return Err(DateParseError::AbbreviatedMonth(month.to_string()));
    }
    Ok(date)
}

/// Format a date the way the feed displays it, e.g. `Jan 05, 2025`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_day_year() {
        assert_eq!(
            parse_date("January 05, 2025", DateFormat::MonthDayYear).unwrap(),
            ymd(2025, 1, 5)
        );
        assert_eq!(
            parse_date("  October 7, 2026\n", DateFormat::MonthDayYear).unwrap(),
            ymd(2026, 10, 7)
        );
    }

    #[test]
    fn test_day_slash_month_year() {
        assert_eq!(
            parse_date("05/Jan/2025", DateFormat::DaySlashMonthYear).unwrap(),
            ymd(2025, 1, 5)
        );
        assert!(parse_date("January 05, 2025", DateFormat::DaySlashMonthYear).is_err());
    }

    #[test]
    fn test_ordinal_suffix_is_stripped() {
        let with_suffix = parse_date("March 3rd, 2025", DateFormat::OrdinalMonthDayYear).unwrap();
        let without = parse_date("March 3, 2025", DateFormat::MonthDayYear).unwrap();
        assert_eq!(with_suffix, without);

        for (text, day) in [
            ("March 1st, 2025", 1),
            ("March 2nd, 2025", 2),
            ("March 11th, 2025", 11),
            ("March 22nd, 2025", 22),
        ] {
            assert_eq!(
                parse_date(text, DateFormat::OrdinalMonthDayYear).unwrap(),
                ymd(2025, 3, day)
            );
        }
    }

    #[test]
    fn test_no_cross_format_fallback() {
        assert!(parse_date("2025-01-05", DateFormat::MonthDayYear).is_err());
        assert!(parse_date("05/Jan/2025", DateFormat::OrdinalMonthDayYear).is_err());
        assert!(parse_date("", DateFormat::MonthDayYear).is_err());
    }

    #[test]
    fn test_abbreviated_month_is_rejected() {
        assert!(matches!(
            parse_date("Jan 05, 2025", DateFormat::MonthDayYear),
            Err(DateParseError::AbbreviatedMonth(m)) if m == "Jan"
        ));
        assert!(parse_date("Mar 3rd, 2025", DateFormat::OrdinalMonthDayYear).is_err());
        // Same spelling either way.
        assert_eq!(
            parse_date("May 9, 2025", DateFormat::MonthDayYear).unwrap(),
            ymd(2025, 5, 9)
        );
    }

    #[test]
    fn test_display_date_zero_pads_day() {
        assert_eq!(display_date(ymd(2025, 1, 5)), "Jan 05, 2025");
    }
}
