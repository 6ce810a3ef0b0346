use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, pool.path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL ITEMS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
    println!("{}• Total items:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 3) ID RANGE
    //
    let (low, high): (Option<i64>, Option<i64>) = pool
        .conn
        .query_row("SELECT MIN(id), MAX(id) FROM items", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;

    let fmt = |v: Option<i64>| {
        v.map(|n| n.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Id range:{}", CYAN, RESET);
    println!("    from: {}", fmt(low));
    println!("    to:   {}", fmt(high));

    //
    // 4) CURRENT ITEM
    //
    let current: Option<String> = pool
        .conn
        .query_row(
            "SELECT dateTime FROM items ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?
        .flatten();

    println!(
        "{}• Current reset:{} {}",
        CYAN,
        RESET,
        current.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
