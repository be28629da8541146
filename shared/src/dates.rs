/// Publication date parsing and display labels.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse the date part of a stored or submitted publication timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM` (what a
/// datetime-local input submits), and bare `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Human label such as `April 15, 2025`; `None` when missing or unparseable.
pub fn published_label(value: Option<&str>) -> Option<String> {
    value
        .and_then(parse_date)
        .map(|date| date.format("%B %-d, %Y").to_string())
}
