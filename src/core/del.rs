use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_event};
use crate::errors::AppResult;
use crate::models::event::Event;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one event by id and return what was removed.
    pub fn apply(pool: &DbPool, id: i64) -> AppResult<Event> {
        let ev = load_event(&pool.conn, id)?;
        delete_event(&pool.conn, id)?;

        audit(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("{} → {}", ev.start_str(), ev.end_str()),
        );

        Ok(ev)
    }
}
