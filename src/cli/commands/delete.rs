use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let ev = DeleteLogic::apply(&pool, *id)?;

        success(format!(
            "Event #{} deleted ({} → {})",
            ev.id,
            ev.start_str(),
            ev.end_str()
        ));
    }

    Ok(())
}
