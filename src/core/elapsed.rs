//! Signed elapsed-time decomposition between a reference instant and "now".

use chrono::{DateTime, TimeZone, Utc};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    /// The reference lies in the future relative to "now".
    Negative,
}

/// Magnitudes are never negative; `hours < 24`, `minutes < 60`, `seconds < 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub sign: Sign,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    /// Interval from `reference` to `now`, truncated to whole seconds.
    pub fn between<A: TimeZone, B: TimeZone>(reference: &DateTime<A>, now: &DateTime<B>) -> Self {
        let delta = now.with_timezone(&Utc) - reference.with_timezone(&Utc);
        Self::from_seconds(delta.num_seconds())
    }

    pub fn from_seconds(total: i64) -> Self {
        let sign = if total < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let abs = total.unsigned_abs() as i64;

        Self {
            sign,
            days: abs / SECS_PER_DAY,
            hours: (abs % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (abs % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: abs % SECS_PER_MINUTE,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Signed total in seconds.
    pub fn total_seconds(&self) -> i64 {
        let abs = self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds;
        match self.sign {
            Sign::Negative => -abs,
            Sign::Positive => abs,
        }
    }
}
