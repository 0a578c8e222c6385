use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;

/// Log a work interval.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        from,
        to,
        excluded,
    } = cmd
    {
        // Parse everything before touching the database
        let d = parse_date(date)?;
        let start = parse_time(from)?;
        let end = parse_time(to)?;

        let pool = DbPool::new(&cfg.database)?;
        let ev = AddLogic::add(&pool, d, start, end, *excluded)?;

        success(format!(
            "Event #{} added: {} → {}{}",
            ev.id,
            ev.start_str(),
            ev.end_str(),
            if ev.excluded { " (excluded)" } else { "" }
        ));
    }

    Ok(())
}
