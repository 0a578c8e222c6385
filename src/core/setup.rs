use crate::core::settings::WorkSettings;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::settings::upsert_setting;
use crate::errors::{AppError, AppResult};
use crate::models::setting::{BREAK_KEY, WORKDAY_KEY};
use crate::ui::prompt::ask;
use crate::utils::time::parse_minutes;
use std::io::{BufRead, Write};

pub struct SetupLogic;

impl SetupLogic {
    /// Ask for workday and break minutes and store them.
    ///
    /// Both answers are validated before anything is written.
    /// Events are left untouched.
    pub fn run<R: BufRead, W: Write>(
        pool: &DbPool,
        input: &mut R,
        out: &mut W,
    ) -> AppResult<WorkSettings> {
        writeln!(out, "Setup")?;
        writeln!(out, "This will replace your current settings but not your data")?;

        let workday = read_minutes(input, out, "Work day in minutes: ")?;
        let break_minutes = read_minutes(input, out, "Break in minutes: ")?;

        upsert_setting(&pool.conn, WORKDAY_KEY, &workday.to_string())?;
        upsert_setting(&pool.conn, BREAK_KEY, &break_minutes.to_string())?;

        audit(
            &pool.conn,
            "setup",
            "",
            &format!("workday={} break={}", workday, break_minutes),
        );

        Ok(WorkSettings::new(workday, break_minutes))
    }
}

fn read_minutes<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> AppResult<i64> {
    let answer = ask(input, out, prompt)?;
    let minutes = parse_minutes(&answer)?;
    if minutes < 0 {
        return Err(AppError::InvalidNumber(answer));
    }
    Ok(minutes)
}
