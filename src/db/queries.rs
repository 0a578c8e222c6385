//! Event queries.

use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use chrono::{DateTime, Local, SecondsFormat, Utc};
use rusqlite::{Connection, Result, Row, params};

/// Stored timestamp form: RFC 3339 with nine fractional digits and a `Z`
/// suffix. Fixed width, so text order equals chronological order.
pub fn ts_to_db(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Read a timestamp column by name, reporting conversion errors against
/// that column's actual index.
fn ts_column(row: &Row, name: &str) -> Result<DateTime<Utc>> {
    let idx = row.as_ref().column_index(name)?;
    let raw: String = row.get(idx)?;

    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

pub fn map_row(row: &Row) -> Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        start: ts_column(row, "start_at")?,
        end: ts_column(row, "end_at")?,
        excluded: row.get::<_, i64>("excluded")? == 1,
        off: row.get::<_, i64>("off")? == 1,
    })
}

/// Insert an event and return its generated id.
pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (start_at, end_at, excluded, off, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ts_to_db(&ev.start),
            ts_to_db(&ev.end),
            if ev.excluded { 1 } else { 0 },
            if ev.off { 1 } else { 0 },
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All events, ordered by start then id.
pub fn load_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare(
        "SELECT id, start_at, end_at, excluded, off FROM events
         ORDER BY start_at ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Event> {
    let mut stmt =
        conn.prepare("SELECT id, start_at, end_at, excluded, off FROM events WHERE id = ?1")?;

    stmt.query_row([id], map_row).map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => AppError::EventNotFound(id),
        other => AppError::Db(other),
    })
}

/// Delete one event. Fails with `EventNotFound` when no row matched.
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    let affected = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    if affected == 0 {
        return Err(AppError::EventNotFound(id));
    }
    Ok(())
}

/// Delete every event and return how many rows were removed.
pub fn delete_all_events(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM events", [])?)
}
