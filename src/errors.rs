//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError so that every command
//! fails the same way: the error bubbles up to `run()` and the process exits.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("No event with id {0}")]
    EventNotFound(i64),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("Backup document error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid interval: end {end} is before start {start}")]
    InvalidInterval { start: String, end: String },

    // ---------------------------
    // Settings
    // ---------------------------
    #[error("Missing required setting '{0}' (run `timesheet setup`)")]
    MissingSetting(String),

    #[error("Setting '{key}' must be a whole number of minutes, got '{value}'")]
    InvalidSetting { key: String, value: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
