//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    pub path: String,
}

impl DbPool {
    /// Open (or create) the database file.
    /// Any failure to reach the medium is reported as `StorageUnavailable`.
    pub fn new(path: &str) -> AppResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(Path::new(path), flags).map_err(|e| {
            AppError::StorageUnavailable {
                path: path.to_string(),
                reason: e.to_string(),
            }
        })?;

        // SQLite opens lazily; touch the file so an unwritable location fails here.
        conn.query_row("PRAGMA schema_version;", [], |row| row.get::<_, i64>(0))
            .map_err(|e| AppError::StorageUnavailable {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    /// In-memory database, handy for throwaway stores.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| AppError::StorageUnavailable {
            path: ":memory:".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            conn,
            path: ":memory:".to_string(),
        })
    }
}
