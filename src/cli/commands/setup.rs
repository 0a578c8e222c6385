use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::setup::SetupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Setup = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();

        let settings = SetupLogic::run(&pool, &mut input, &mut out)?;

        println!();
        success(format!(
            "Settings saved: workday = {} min, break = {} min",
            settings.workday_minutes, settings.break_minutes
        ));
    }

    Ok(())
}
