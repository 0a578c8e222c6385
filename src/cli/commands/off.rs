use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Off { date } = cmd {
        let d = parse_date(date)?;

        let pool = DbPool::new(&cfg.database)?;
        let ev = AddLogic::off(&pool, d)?;

        success(format!("Event #{}: {} logged as a day off", ev.id, d));
    }

    Ok(())
}
