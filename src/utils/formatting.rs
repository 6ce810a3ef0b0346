//! Formatting utilities used for CLI output.

use crate::core::elapsed::{Elapsed, Sign};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

fn unit(n: i64, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

/// Render an elapsed interval.
/// Zero days/hours/minutes are left out; seconds are always shown.
///
/// es: `2 days 3 hours 0 seconds`, `- 5 seconds`
pub fn elapsed2readable(e: &Elapsed) -> String {
    let mut parts = Vec::new();

    if e.days > 0 {
        parts.push(unit(e.days, "day", "days"));
    }
    if e.hours > 0 {
        parts.push(unit(e.hours, "hour", "hours"));
    }
    if e.minutes > 0 {
        parts.push(unit(e.minutes, "minute", "minutes"));
    }
    parts.push(unit(e.seconds, "second", "seconds"));

    let body = parts.join(" ");
    match e.sign {
        Sign::Negative => format!("- {}", body),
        Sign::Positive => body,
    }
}
