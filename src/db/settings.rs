//! Setting queries.

use crate::errors::AppResult;
use crate::models::setting::Setting;
use rusqlite::{Connection, OptionalExtension, params};

pub fn get_setting(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

pub fn list_settings(conn: &Connection) -> AppResult<Vec<Setting>> {
    let mut stmt = conn.prepare("SELECT key, value FROM settings ORDER BY key ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Setting {
            key: row.get(0)?,
            value: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert the setting, or replace the value of an existing key.
pub fn upsert_setting(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Insert the setting only when the key does not exist yet.
/// Returns true when a row was written.
pub fn insert_setting_if_absent(conn: &Connection, key: &str, value: &str) -> AppResult<bool> {
    let affected = conn.execute(
        "INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)",
        params![key, value],
    )?;
    Ok(affected > 0)
}

pub fn delete_all_settings(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM settings", [])?)
}
