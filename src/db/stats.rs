use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    let events: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    let days_off: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events WHERE off = 1", [], |row| {
            row.get(0)
        })?;
    let settings: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM settings", [], |row| row.get(0))?;

    println!("{}• Events:{} {}{}{} ({} days off)", CYAN, RESET, GREEN, events, RESET, days_off);
    println!("{}• Settings:{} {}", CYAN, RESET, settings);

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT MIN(start_at) FROM events", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();
    let last: Option<String> = pool
        .conn
        .query_row("SELECT MAX(start_at) FROM events", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    let dash = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.as_deref().map(day_of).unwrap_or(dash.as_str()));
    println!("    to:   {}", last.as_deref().map(day_of).unwrap_or(dash.as_str()));

    //
    // 4) SCHEMA
    //
    let versions = applied_versions(&pool.conn)?;
    println!("{}• Migrations:{} {}", CYAN, RESET, versions.len());
    for v in versions {
        println!("    {}", v);
    }

    println!();
    Ok(())
}

/// Calendar day part of a stored timestamp.
fn day_of(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}
