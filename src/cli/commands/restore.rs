use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let stats = BackupLogic::restore(&mut pool, Path::new(file))?;

        success(format!(
            "Restored {} settings and {} events from {}",
            stats.settings, stats.events, file
        ));
    }

    Ok(())
}
