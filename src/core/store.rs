//! Item store: the only gateway to the `items` table.
//!
//! Every call is its own implicit transaction and reads straight from the
//! database; there is no in-memory mirror to keep in sync.

use crate::core::export::{items_to_json, parse_records};
use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::item::Item;
use crate::utils::date::parse_date_time;
use rusqlite::Connection;

pub struct ItemStore {
    pool: DbPool,
}

/// Outcome of a best-effort import.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Ids inserted, in input order.
    pub imported: Vec<i64>,
    /// Records that could not be inserted, with the reason.
    pub failed: Vec<(i64, AppError)>,
}

impl ImportReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl ItemStore {
    /// Open the database file and make sure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        let store = Self { pool };
        store.initialize()?;
        Ok(store)
    }

    /// Create the schema if absent. Idempotent.
    /// Returns `true` when this call created the `items` table.
    pub fn initialize(&self) -> AppResult<bool> {
        init_db(&self.pool.conn)
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// All items, highest id first.
    pub fn list_all(&self) -> AppResult<Vec<Item>> {
        queries::load_items(&self.pool.conn)
    }

    /// The item with the highest id.
    pub fn current(&self) -> AppResult<Option<Item>> {
        Ok(self.list_all()?.into_iter().next())
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Item>> {
        queries::load_item(&self.pool.conn, id)
    }

    /// Id used by the automatic add path: max + 1, or 1 on an empty table.
    pub fn next_id(&self) -> AppResult<i64> {
        Ok(queries::max_id(&self.pool.conn)?.map_or(1, |m| m + 1))
    }

    pub fn count(&self) -> AppResult<i64> {
        queries::count_items(&self.pool.conn)
    }

    /// Insert a new item. Fails with `ConstraintViolation` when `id` is taken.
    pub fn add(&self, id: i64, date_time: &str) -> AppResult<Item> {
        ensure_parseable(date_time)?;

        let item = Item::new(id, date_time);
        queries::insert_item(&self.pool.conn, &item)?;

        ttlog_quiet(
            &self.pool.conn,
            "add",
            &id.to_string(),
            &format!("Added item {} at {}", id, date_time),
        );
        Ok(item)
    }

    /// Re-timestamp an item. A missing id is not an error; the return value
    /// tells whether a row was touched.
    pub fn update(&self, id: i64, date_time: &str) -> AppResult<bool> {
        ensure_parseable(date_time)?;

        let touched = queries::update_item(&self.pool.conn, id, date_time)? > 0;
        if touched {
            ttlog_quiet(
                &self.pool.conn,
                "edit",
                &id.to_string(),
                &format!("Item {} reset to {}", id, date_time),
            );
        }
        Ok(touched)
    }

    /// Remove one item. No-op when absent.
    pub fn delete_one(&self, id: i64) -> AppResult<bool> {
        let removed = queries::delete_item(&self.pool.conn, id)? > 0;
        if removed {
            ttlog_quiet(
                &self.pool.conn,
                "del",
                &id.to_string(),
                &format!("Deleted item {}", id),
            );
        }
        Ok(removed)
    }

    /// Remove every item. Returns how many rows were deleted.
    pub fn delete_all(&self) -> AppResult<usize> {
        let n = queries::delete_all_items(&self.pool.conn)?;
        if n > 0 {
            ttlog_quiet(
                &self.pool.conn,
                "del",
                "all",
                &format!("Deleted all items ({})", n),
            );
        }
        Ok(n)
    }

    /// JSON array of `{id, dateTime}`, highest id first.
    pub fn export_all(&self) -> AppResult<String> {
        items_to_json(&self.list_all()?, false)
    }

    /// Insert every record of a JSON payload, in order.
    ///
    /// The payload is validated as a whole first: a malformed payload inserts
    /// nothing. After that each record is an independent insert, so a colliding
    /// id only skips that record and the rest of the batch still commits.
    pub fn import_all(&self, text: &str) -> AppResult<ImportReport> {
        let records = parse_records(text)?;

        let mut report = ImportReport::default();
        for item in records {
            match queries::insert_item(&self.pool.conn, &item) {
                Ok(()) => report.imported.push(item.id),
                Err(e @ AppError::ConstraintViolation(_)) => report.failed.push((item.id, e)),
                Err(e) => return Err(e),
            }
        }

        ttlog_quiet(
            &self.pool.conn,
            "import",
            "",
            &format!(
                "Imported {} item(s), {} skipped",
                report.imported.len(),
                report.failed.len()
            ),
        );
        Ok(report)
    }
}

fn ensure_parseable(date_time: &str) -> AppResult<()> {
    parse_date_time(date_time)
        .map(|_| ())
        .ok_or_else(|| AppError::MalformedInput(format!("unparseable dateTime '{}'", date_time)))
}
