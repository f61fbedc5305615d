//! Date utilities: combine backend date/hour strings into UTC instants,
//! parse date-only inputs and normalise dates for display.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Combine a `YYYY-MM-DD` date and a `HH:MM:SS` time into a UTC instant.
///
/// Returns `None` unless the date has exactly three `-` parts and the time
/// exactly three `:` parts, each an integer forming a real calendar value.
pub fn parse_instant(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date_parts: Vec<&str> = date.trim().split('-').collect();
    let time_parts: Vec<&str> = time.trim().split(':').collect();

    let ([y, mo, d], [h, mi, s]) = (date_parts.as_slice(), time_parts.as_slice()) else {
        return None;
    };

    let day = NaiveDate::from_ymd_opt(y.parse().ok()?, mo.parse().ok()?, d.parse().ok()?)?;
    let dt = day.and_hms_opt(h.parse().ok()?, mi.parse().ok()?, s.parse().ok()?)?;

    Some(dt.and_utc())
}

/// Same as [`parse_instant`] with optional parts; any missing part gives `None`.
pub fn parse_optional_instant(date: Option<&str>, time: Option<&str>) -> Option<DateTime<Utc>> {
    parse_instant(date?, time?)
}

/// Parse a date-only user input (`YYYY-MM-DD`) as midnight UTC.
pub fn parse_date_input(s: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

/// Reduce a backend date value to `YYYY-MM-DD`.
///
/// Accepts plain dates, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM:SS`.
/// Anything else is returned unchanged.
pub fn normalize_date(s: &str) -> String {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.format("%Y-%m-%d").to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return dt.date().format("%Y-%m-%d").to_string();
        }
    }

    s.to_string()
}

/// Date cell for tables and reports. Missing dates render empty.
pub fn format_work_date(date: Option<&str>) -> String {
    date.map(normalize_date).unwrap_or_default()
}

/// Parse an explicit "current time": RFC 3339, or a naive
/// `YYYY-MM-DDTHH:MM:SS` taken as UTC.
pub fn parse_now(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc())
}
