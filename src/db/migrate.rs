use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the given table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `items` table. The column name `dateTime` is part of the file format.
fn create_items_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id       INTEGER PRIMARY KEY NOT NULL,
            dateTime TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db(). Idempotent.
/// Returns `true` when the `items` table was created by this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<bool> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create items table if missing
    let created = !table_exists(conn, "items")?;
    create_items_table(conn)?;

    if created {
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', 'items', 'Created items table')",
            [chrono::Local::now().to_rfc3339()],
        )?;
    }

    Ok(created)
}
