//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    /// Migration versions applied while opening this connection.
    pub applied_migrations: Vec<&'static str>,
}

impl DbPool {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Self::from_connection(Connection::open(p)?)
    }

    /// Private in-memory database, used by tests and dry runs.
    pub fn in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        let applied_migrations = run_pending_migrations(&conn)?;
        Ok(Self {
            conn,
            applied_migrations,
        })
    }
}
