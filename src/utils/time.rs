//! Time utilities: parsing HH:MM and building UTC timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Parse a `HH:MM` wall clock time.
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Combine a date and a wall clock time, interpreted as UTC.
pub fn at_utc(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

/// Parse an integer given on the command line or at a prompt.
pub fn parse_minutes(s: &str) -> AppResult<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidNumber(s.trim().to_string()))
}
