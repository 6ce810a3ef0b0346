//! Date-time utilities: parsing the accepted `dateTime` text forms, formatting, now().

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Naive layouts, read as local time.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Layout of `Date.prototype.toString()` once the zone name is stripped.
const JS_DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Parse any accepted `dateTime` text into an instant with its offset.
pub fn parse_date_time(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt);
    }

    // "Mon Oct 19 2026 08:30:00 GMT+0200 (Central European Summer Time)"
    let js = match s.find(" (") {
        Some(idx) => &s[..idx],
        None => s,
    };
    if let Ok(dt) = DateTime::parse_from_str(js, JS_DATE_FORMAT) {
        return Some(dt);
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_from_naive(naive);
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return local_from_naive(d.and_hms_opt(0, 0, 0)?);
    }

    None
}

/// Attach the local offset. Ambiguous wall times (DST fold) take the earlier instant;
/// times skipped by a DST gap do not exist and yield None.
fn local_from_naive(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    naive
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.fixed_offset())
}

pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}

/// Format with a user-supplied chrono pattern, falling back to RFC 3339 when the
/// pattern is invalid.
pub fn format_date_time(dt: &DateTime<FixedOffset>, fmt: &str) -> String {
    let local = dt.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(fmt)).is_err() {
        return dt.to_rfc3339();
    }
    out
}
