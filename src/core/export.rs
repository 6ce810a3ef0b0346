//! JSON transfer format: `[{"id": 2, "dateTime": "..."}, ...]`.

use crate::errors::{AppError, AppResult};
use crate::models::item::Item;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_date_time;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub fn items_to_json(items: &[Item], pretty: bool) -> AppResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(items)?
    } else {
        serde_json::to_string(items)?
    };
    Ok(json)
}

/// Parse an import payload.
///
/// Accepts an array of objects with an integer `id` (a JSON number or a
/// numeric string) and a parseable `dateTime` string. An explicit
/// `"dateTime": null` is accepted and restores a NULL column, so exports of
/// undated rows import back. Extra keys are ignored.
/// The `dateTime` text is kept verbatim.
pub fn parse_records(text: &str) -> AppResult<Vec<Item>> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| AppError::MalformedInput(format!("not valid JSON: {}", e)))?;

    let array = value
        .as_array()
        .ok_or_else(|| AppError::MalformedInput("expected a JSON array of records".into()))?;

    let mut out = Vec::with_capacity(array.len());
    for (idx, record) in array.iter().enumerate() {
        let obj = record.as_object().ok_or_else(|| {
            AppError::MalformedInput(format!("record #{} is not an object", idx + 1))
        })?;

        let id = obj
            .get("id")
            .and_then(coerce_id)
            .ok_or_else(|| {
                AppError::MalformedInput(format!("record #{}: missing or non-integer 'id'", idx + 1))
            })?;

        let date_time = match obj.get("dateTime") {
            Some(Value::Null) => {
                out.push(Item::undated(id));
                continue;
            }
            Some(Value::String(s)) => s.as_str(),
            _ => {
                return Err(AppError::MalformedInput(format!(
                    "record #{}: missing 'dateTime' string",
                    idx + 1
                )));
            }
        };

        if parse_date_time(date_time).is_none() {
            return Err(AppError::MalformedInput(format!(
                "record #{}: unparseable dateTime '{}'",
                idx + 1,
                date_time
            )));
        }

        out.push(Item::new(id, date_time));
    }

    Ok(out)
}

/// Integer ids, integral floats (`3.0`) and numeric strings (`"3"`).
fn coerce_id(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the payload to `path`. An existing file is only replaced with
    /// `force` or after confirmation.
    pub fn write_file(path: &Path, json: &str, force: bool) -> AppResult<()> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, json)?;
        success(format!("JSON export completed: {}", path.display()));
        Ok(())
    }

    /// Read an import payload from a file, or from stdin when no path is given.
    pub fn read_payload(path: Option<&Path>) -> AppResult<String> {
        match path {
            Some(p) => Ok(fs::read_to_string(p)?),
            None => Ok(io::read_to_string(io::stdin())?),
        }
    }
}

/// Check whether a file can be created or overwritten.
///
/// - file does NOT exist → Ok
/// - exists and `force` → Ok
/// - exists and `force == false` → ask the user.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}
