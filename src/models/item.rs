use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_date_time, parse_date_time};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A counter-reset record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64, // ⇔ items.id (INTEGER PRIMARY KEY)
    #[serde(rename = "dateTime")]
    pub date_time: Option<String>, // ⇔ items.dateTime (TEXT, nullable, stored verbatim)
}

impl Item {
    pub fn new(id: i64, date_time: impl Into<String>) -> Self {
        Self {
            id,
            date_time: Some(date_time.into()),
        }
    }

    /// Row without a timestamp, as left behind by imports of records lacking one.
    pub fn undated(id: i64) -> Self {
        Self {
            id,
            date_time: None,
        }
    }

    /// Parsed `dateTime`.
    pub fn timestamp(&self) -> AppResult<DateTime<FixedOffset>> {
        match self.date_time.as_deref() {
            Some(text) => parse_date_time(text).ok_or_else(|| {
                AppError::MalformedInput(format!(
                    "item {} has an unparseable dateTime '{}'",
                    self.id, text
                ))
            }),
            None => Err(AppError::MalformedInput(format!(
                "item {} has no dateTime",
                self.id
            ))),
        }
    }

    /// Human-readable timestamp; falls back to the raw text when it cannot be parsed.
    pub fn display_date_time(&self, fmt: &str) -> String {
        match self.date_time.as_deref() {
            Some(text) => match parse_date_time(text) {
                Some(dt) => format_date_time(&dt, fmt),
                None => text.to_string(),
            },
            None => "--".to_string(),
        }
    }
}
