use crate::db::store::SettingsStore;
use crate::errors::{AppError, AppResult};
use crate::models::setting::{BREAK_KEY, WORKDAY_KEY};

/// Validated numeric settings consumed by the aggregation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSettings {
    pub workday_minutes: i64,
    pub break_minutes: i64,
}

impl WorkSettings {
    pub fn new(workday_minutes: i64, break_minutes: i64) -> Self {
        Self {
            workday_minutes,
            break_minutes,
        }
    }

    /// Read `workday` and `break` from the store.
    ///
    /// Both must exist and parse as integers; nothing is defaulted.
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> AppResult<Self> {
        Ok(Self {
            workday_minutes: required_minutes(store, WORKDAY_KEY)?,
            break_minutes: required_minutes(store, BREAK_KEY)?,
        })
    }
}

fn required_minutes<S: SettingsStore + ?Sized>(store: &S, key: &str) -> AppResult<i64> {
    let value = store
        .get_setting(key)?
        .ok_or_else(|| AppError::MissingSetting(key.to_string()))?;

    value.trim().parse::<i64>().map_err(|_| AppError::InvalidSetting {
        key: key.to_string(),
        value,
    })
}
