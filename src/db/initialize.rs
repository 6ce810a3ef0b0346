use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation to the migration engine and returns
/// whether the `items` table had to be created.
pub fn init_db(conn: &Connection) -> AppResult<bool> {
    run_pending_migrations(conn).map_err(|e| match e {
        // a read-only or vanished medium surfaces while creating the schema
        rusqlite::Error::SqliteFailure(err, msg)
            if matches!(
                err.code,
                rusqlite::ErrorCode::CannotOpen
                    | rusqlite::ErrorCode::ReadOnly
                    | rusqlite::ErrorCode::NotADatabase
                    | rusqlite::ErrorCode::PermissionDenied
            ) =>
        {
            AppError::StorageUnavailable {
                path: conn.path().unwrap_or_default().to_string(),
                reason: msg.unwrap_or_else(|| err.to_string()),
            }
        }
        other => AppError::Db(other),
    })
}
