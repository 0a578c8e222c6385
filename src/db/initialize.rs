use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::settings::insert_setting_if_absent;
use crate::errors::AppResult;
use crate::models::setting::{BREAK_KEY, WORKDAY_KEY};

/// Seed the required settings with defaults, keeping existing values.
/// Returns the keys that were written.
pub fn seed_settings(
    pool: &DbPool,
    default_workday: i64,
    default_break: i64,
) -> AppResult<Vec<&'static str>> {
    let mut seeded = Vec::new();

    for (key, value) in [(WORKDAY_KEY, default_workday), (BREAK_KEY, default_break)] {
        if insert_setting_if_absent(&pool.conn, key, &value.to_string())? {
            audit(&pool.conn, "setting", key, &format!("Seeded default value {}", value));
            seeded.push(key);
        }
    }

    Ok(seeded)
}
