//! Locale Date Formatting
//!
//! Dates are shown as `M/D/YYYY`. Anything that does not parse as a date
//! renders as `Invalid Date` instead of failing the view.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

pub const INVALID_DATE: &str = "Invalid Date";

/// Format a date-like JSON value
pub fn format_locale_date(value: Option<&Value>) -> String {
    parse_date(value)
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_date(value: Option<&Value>) -> Option<NaiveDate> {
    match value? {
        Value::String(s) => parse_date_str(s.trim()),
        // Epoch milliseconds
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
        }
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    // Offsets without a colon, e.g. `+0000`
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }
    // `%B` also accepts abbreviated month names
    ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"]
        .into_iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}
