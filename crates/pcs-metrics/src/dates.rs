//! Date parsing for the free-text date columns.
//!
//! Source exports mix ISO dates, US-style dates and date-times, so parsing
//! tries each known layout and keeps only the calendar date.

use chrono::{NaiveDate, NaiveDateTime};

// Two-digit-year layouts come first: `%Y` also accepts `21` as year 21.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%d-%b-%Y", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a date or date-time string to its calendar date.
///
/// Returns None for partial dates (`2023-12`) and anything unrecognized.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    None
}

/// Whole days from `start` to `end`; negative when `end` comes first.
pub fn days_between(start: &str, end: &str) -> Option<i64> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    Some((end - start).num_days())
}
