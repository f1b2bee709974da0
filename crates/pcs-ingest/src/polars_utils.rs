//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions, missing-value detection and numeric parsing.

use polars::prelude::AnyValue;

/// Cell texts treated as missing, matching the usual spreadsheet/pandas NA markers.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, properly formats numeric types.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "1" } else { "0" }.to_string(),
        other => other.to_string(),
    }
}

/// Converts AnyValue to trimmed text, returning None for missing markers.
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    clean_text(&any_to_string(value))
}

/// Trims a raw cell and maps NA markers to None.
pub fn clean_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if is_missing_text(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn is_missing_text(value: &str) -> bool {
    MISSING_MARKERS.contains(&value.trim())
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    // Strip unnecessary trailing zeros
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Converts an AnyValue to f64, returning None for non-numeric or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)).filter(|v| v.is_finite()),
        AnyValue::Float64(v) => Some(v).filter(|v| v.is_finite()),
        AnyValue::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses a string as f64, returning None for invalid, NA or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if is_missing_text(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses an integral code (`"1"`, `"1.0"`), returning None for fractions.
pub fn parse_code(value: &str) -> Option<i64> {
    let number = parse_f64(value)?;
    if number.fract() == 0.0 {
        Some(number as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_numeric_drops_trailing_zeros() {
        assert_eq!(format_numeric(3.0), "3");
        assert_eq!(format_numeric(3.80), "3.8");
        assert_eq!(format_numeric(120.0), "120");
    }

    #[test]
    fn missing_markers_map_to_none() {
        assert_eq!(clean_text("  NA "), None);
        assert_eq!(clean_text("nan"), None);
        assert_eq!(clean_text(""), None);
        assert_eq!(clean_text(" 2021-03-04 "), Some("2021-03-04".to_string()));
    }

    #[test]
    fn codes_accept_float_renderings() {
        assert_eq!(parse_code("1"), Some(1));
        assert_eq!(parse_code("1.0"), Some(1));
        assert_eq!(parse_code("1.5"), None);
        assert_eq!(parse_code("N/A"), None);
    }

    #[test]
    fn any_value_conversions() {
        assert_eq!(any_to_f64(AnyValue::String("2.5")), Some(2.5));
        assert_eq!(any_to_f64(AnyValue::Int64(3)), Some(3.0));
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_text(AnyValue::Float64(1023.0)), Some("1023".to_string()));
        assert_eq!(any_to_text(AnyValue::String("NaN")), None);
    }
}
