use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::seed_settings;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
///  - the `workday` and `break` settings, when absent
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing timesheet…");

    if !cli.test {
        let path = Config::config_file();
        if path.exists() {
            info(format!("Config file kept: {}", path.display()));
        } else {
            cfg.save_to(&path)?;
            success(format!("Config file: {}", path.display()));
        }
    }

    let pool = DbPool::new(&cfg.database)?;
    for version in &pool.applied_migrations {
        info(format!("Migration applied: {}", version));
    }

    for key in seed_settings(&pool, cfg.default_workday, cfg.default_break)? {
        info(format!("Setting '{}' initialized with its default", key));
    }

    audit(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", cfg.database),
    );

    success(format!("Database: {}", cfg.database));
    Ok(())
}
