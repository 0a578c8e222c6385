use crate::core::calculator::{summarize_by_day, summarize_by_year};
use crate::core::settings::WorkSettings;
use crate::db::store::{EventStore, SettingsStore};
use crate::errors::AppResult;
use crate::models::summary::{DayRow, SummaryRow};

/// Entry points that read a store snapshot and run the summary engine.
pub struct Core;

impl Core {
    /// Expected vs. worked minutes per year.
    ///
    /// Settings are validated before events are read, so a missing or
    /// malformed setting fails fast.
    pub fn year_summary<S>(store: &S) -> AppResult<Vec<SummaryRow>>
    where
        S: EventStore + SettingsStore + ?Sized,
    {
        let settings = WorkSettings::load(store)?;
        let events = store.list_events()?;
        Ok(summarize_by_year(&events, &settings))
    }

    /// Net worked minutes per day.
    pub fn day_summary<S>(store: &S) -> AppResult<Vec<DayRow>>
    where
        S: EventStore + SettingsStore + ?Sized,
    {
        let settings = WorkSettings::load(store)?;
        let events = store.list_events()?;
        Ok(summarize_by_day(&events, &settings))
    }
}
