//! Versioned schema migrations.
//!
//! Every migration runs once. Applied versions are recorded in the `log`
//! table as `migration_applied` rows, so the log table is created first
//! and outside the versioned list.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240101_0001_create_settings",
        description: "Created settings table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS settings (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            key    TEXT NOT NULL UNIQUE,
            value  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20240101_0002_create_events",
        description: "Created events table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            start_at    TEXT NOT NULL,
            end_at      TEXT NOT NULL,
            excluded    INTEGER NOT NULL DEFAULT 0 CHECK(excluded IN (0, 1)),
            off         INTEGER NOT NULL DEFAULT 0 CHECK(off IN (0, 1)),
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20240315_0003_index_events_start",
        description: "Added index on events(start_at)",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_events_start ON events(start_at);
        "#,
    },
    Migration {
        version: "20240610_0004_events_nanosecond_timestamps",
        description: "Widened event timestamps to nanosecond precision",
        sql: r#"
        UPDATE events
           SET start_at = substr(start_at, 1, 19) || '.000000000Z'
         WHERE length(start_at) = 20;
        UPDATE events
           SET end_at = substr(end_at, 1, 19) || '.000000000Z'
         WHERE length(end_at) = 20;
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
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

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM log
             WHERE operation = 'migration_applied' AND target = ?1
             LIMIT 1",
            [version],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Run all pending migrations and return the versions applied now.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
            applied.push(m.version);
        }
    }

    Ok(applied)
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
