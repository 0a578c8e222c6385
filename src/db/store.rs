//! Read contracts the summary engine consumes.
//!
//! Any persistence that can list events and look up a setting by key
//! satisfies them. [`DbPool`] is the SQLite implementation.

use crate::db::pool::DbPool;
use crate::db::{queries, settings};
use crate::errors::AppResult;
use crate::models::event::Event;

pub trait EventStore {
    /// Every stored event. Callers must not rely on the order.
    fn list_events(&self) -> AppResult<Vec<Event>>;
}

pub trait SettingsStore {
    /// Value of `key`, or `None` when the key is not set.
    fn get_setting(&self, key: &str) -> AppResult<Option<String>>;
}

impl EventStore for DbPool {
    fn list_events(&self) -> AppResult<Vec<Event>> {
        queries::load_events(&self.conn)
    }
}

impl SettingsStore for DbPool {
    fn get_setting(&self, key: &str) -> AppResult<Option<String>> {
        settings::get_setting(&self.conn, key)
    }
}
