//! Calendar-date parsing and `DD/MM/YYYY` rendering for loosely typed JSON
//! date values.
//!
//! Values arrive as RFC 3339 / ISO-8601 strings (seconds and colon in the
//! offset optional), bare `YYYY-MM-DD`, `YYYY-MM` or `YYYY` dates, RFC 2822
//! strings, or epoch-millisecond numbers. Anything else renders as
//! [`DATE_PLACEHOLDER`].

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Rendered in place of a date that is missing or cannot be parsed.
pub const DATE_PLACEHOLDER: &str = "-";

/// ISO-8601 date-times carrying a zone that RFC 3339 parsing rejects:
/// minutes-only times and offsets written without a colon.
const ZONED_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

/// Times ending in a literal `Z`, for when the offset specifiers above do
/// not take it.
const UTC_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%S%.fZ"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a JSON date value into an instant, reading zone-less date-times as
/// wall-clock time in `tz`.
///
/// Date-only strings (`2024-03-05`, `2024-03`, `2024`) are taken as UTC
/// midnight of their first day, the same way browsers treat date-only ISO
/// strings.
pub fn parse_date_in<Tz: TimeZone>(value: &Value, tz: &Tz) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_str(s.trim(), tz),
        Value::Number(n) => {
            let millis = n.as_f64().filter(|f| f.is_finite())?;
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        _ => None,
    }
}

fn parse_date_str<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ZONED_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in UTC_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    if let Some(date) = parse_date_only(s) {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    DateTime::parse_from_rfc2822(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`; missing parts default to the first
/// month/day.
fn parse_date_only(s: &str) -> Option<NaiveDate> {
    if !s.is_ascii() {
        return None;
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match s.len() {
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
        7 if all_digits(&s[..4]) && &s[4..5] == "-" && all_digits(&s[5..]) => {
            NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok()
        }
        4 if all_digits(s) => NaiveDate::parse_from_str(&format!("{s}-01-01"), "%Y-%m-%d").ok(),
        _ => None,
    }
}

/// Render a date value as `DD/MM/YYYY` in the calendar of `tz`.
///
/// Returns [`DATE_PLACEHOLDER`] for `None`, JSON null, and anything
/// [`parse_date_in`] rejects.
pub fn format_date_in<Tz: TimeZone>(value: Option<&Value>, tz: &Tz) -> String {
    let Some(instant) = value.and_then(|v| parse_date_in(v, tz)) else {
        return DATE_PLACEHOLDER.to_string();
    };
    let local = instant.with_timezone(tz);
    format!("{:02}/{:02}/{}", local.day(), local.month(), local.year())
}

/// Render a date value as `DD/MM/YYYY` in the machine's local calendar.
pub fn format_date(value: Option<&Value>) -> String {
    format_date_in(value, &Local)
}
