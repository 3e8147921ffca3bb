//! Free-form date parsing and locale pattern formatting.
//!
//! Locale date formats are stored as translation entries using day/month/
//! year/hour/minute/second tokens (e.g. `d/m/Y H:i:s`), so translators can
//! override them per locale without touching code. This module maps that
//! token syntax onto `chrono` and parses the loosely-formatted date strings
//! the application hands us.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Pattern applied when a locale defines no `__date` entry.
pub const DEFAULT_DATE_PATTERN: &str = "Y-m-d";

/// Pattern applied when a locale defines no `__dateTime` entry.
pub const DEFAULT_DATETIME_PATTERN: &str = "d/m/Y H:i:s";

/// Accepted date-time input layouts, tried in order.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Accepted date-only input layouts, tried in order.
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parse a free-form date string into a naive instant.
///
/// Tries RFC 3339 first, then the fixed layouts above; date-only inputs
/// resolve to midnight. Returns `None` for anything unparseable.
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.naive_utc());
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Some(instant);
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(day) = NaiveDate::parse_from_str(trimmed, layout) {
            return Some(day.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Format `when` using a locale pattern string.
///
/// Supported tokens: `d` / `j` (day, padded / unpadded), `m` / `n` (month,
/// padded / unpadded), `Y` / `y` (year, four / two digits), `H` / `G` (hour,
/// padded / unpadded), `i` (minutes), `s` (seconds). A backslash escapes the
/// next character to a literal; any other character is copied through.
pub fn format_with_pattern(when: &NaiveDateTime, pattern: &str) -> String {
    let mut spec = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            'd' => spec.push_str("%d"),
            'j' => spec.push_str("%-d"),
            'm' => spec.push_str("%m"),
            'n' => spec.push_str("%-m"),
            'Y' => spec.push_str("%Y"),
            'y' => spec.push_str("%y"),
            'H' => spec.push_str("%H"),
            'G' => spec.push_str("%-H"),
            'i' => spec.push_str("%M"),
            's' => spec.push_str("%S"),
            // '%' is meaningful to chrono, not to the pattern syntax
            '%' => spec.push_str("%%"),
            '\\' => match chars.next() {
                Some('%') => spec.push_str("%%"),
                Some(literal) => spec.push(literal),
                None => {}
            },
            other => spec.push(other),
        }
    }
    when.format(&spec).to_string()
}

/// Drop the seconds token (the literal `:s` suffix form) from a pattern.
pub fn strip_seconds(pattern: &str) -> String {
    pattern.replace(":s", "")
}
