use crate::cli::parser::{Commands, SettingAction};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::settings::{list_settings, upsert_setting};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Setting { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            SettingAction::List => {
                let mut table = Table::new(vec!["Key", "Value"], cfg.separator());
                for s in list_settings(&pool.conn)? {
                    table.add_row(vec![s.key, s.value]);
                }
                print!("{}", table.render());
            }
            SettingAction::Set { key, value } => {
                upsert_setting(&pool.conn, key, value)?;
                audit(&pool.conn, "setting", key, &format!("Set to '{}'", value));
                success(format!("Setting '{}' = '{}'", key, value));
            }
        }
    }

    Ok(())
}
