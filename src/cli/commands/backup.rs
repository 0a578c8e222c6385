use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let dest = Path::new(file);
        let target = if *compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if target.exists() && !*force {
            warning(format!("The file '{}' already exists.", target.display()));

            let stdin = io::stdin();
            if !confirm(&mut stdin.lock(), &mut io::stdout(), "Overwrite?")? {
                info("Backup cancelled.");
                return Ok(());
            }
        }

        let pool = DbPool::new(&cfg.database)?;
        let written = BackupLogic::backup(&pool, dest, *compress)?;

        success(format!("Backup created: {}", written.display()));
    }

    Ok(())
}
