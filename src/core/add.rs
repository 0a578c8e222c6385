use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::utils::time::at_utc;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` and `off` commands.
pub struct AddLogic;

impl AddLogic {
    /// Log work on `date` between `from` and `to` (UTC).
    ///
    /// Intervals ending before they start are rejected; intervals
    /// crossing midnight must be split by the user.
    pub fn add(
        pool: &DbPool,
        date: NaiveDate,
        from: NaiveTime,
        to: NaiveTime,
        excluded: bool,
    ) -> AppResult<Event> {
        if to < from {
            return Err(AppError::InvalidInterval {
                start: from.format("%H:%M").to_string(),
                end: to.format("%H:%M").to_string(),
            });
        }

        let mut ev = Event::work(at_utc(date, from), at_utc(date, to), excluded);
        ev.id = insert_event(&pool.conn, &ev)?;

        audit(
            &pool.conn,
            "add",
            &ev.id.to_string(),
            &format!(
                "{} {}-{}{}",
                date,
                from.format("%H:%M"),
                to.format("%H:%M"),
                if excluded { " (excluded)" } else { "" }
            ),
        );

        Ok(ev)
    }

    /// Mark `date` as a day off.
    pub fn off(pool: &DbPool, date: NaiveDate) -> AppResult<Event> {
        let mut ev = Event::day_off(date);
        ev.id = insert_event(&pool.conn, &ev)?;

        audit(&pool.conn, "off", &ev.id.to_string(), &format!("{} marked as day off", date));

        Ok(ev)
    }
}
