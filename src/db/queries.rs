use crate::errors::{AppError, AppResult};
use crate::models::item::Item;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Item> {
    Ok(Item {
        id: row.get("id")?,
        // nullable column: NULL stays None all the way to the JSON export
        date_time: row.get("dateTime")?,
    })
}

/// All items, highest id first.
pub fn load_items(conn: &Connection) -> AppResult<Vec<Item>> {
    let mut stmt = conn.prepare_cached("SELECT id, dateTime FROM items ORDER BY id DESC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_item(conn: &Connection, id: i64) -> AppResult<Option<Item>> {
    let mut stmt = conn.prepare_cached("SELECT id, dateTime FROM items WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn max_id(conn: &Connection) -> AppResult<Option<i64>> {
    let max: Option<i64> = conn.query_row("SELECT MAX(id) FROM items", [], |row| row.get(0))?;
    Ok(max)
}

pub fn count_items(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?)
}

/// Insert a new row. A primary-key collision is reported as `ConstraintViolation`.
pub fn insert_item(conn: &Connection, item: &Item) -> AppResult<()> {
    conn.execute(
        "INSERT INTO items (id, dateTime) VALUES (?1, ?2)",
        params![item.id, item.date_time],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(ref err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::ConstraintViolation(item.id)
        }
        other => AppError::Db(other),
    })?;
    Ok(())
}

/// Replace the timestamp of an item. Returns the number of rows touched (0 or 1).
pub fn update_item(conn: &Connection, id: i64, date_time: &str) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE items SET dateTime = ?1 WHERE id = ?2",
        params![date_time, id],
    )?;
    Ok(n)
}

pub fn delete_item(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM items WHERE id = ?1", [id])?)
}

pub fn delete_all_items(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM items", [])?)
}

pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
