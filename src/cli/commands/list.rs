use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_events;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::utils::formatting::yes_no;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let events = load_events(&pool.conn)?;

        print!("{}", render_events(&events, cfg.separator()));
    }
    Ok(())
}

pub fn render_events(events: &[Event], separator: char) -> String {
    let mut table = Table::new(vec!["Id", "Start", "End", "Off", "Excluded"], separator);

    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.start_str(),
            ev.end_str(),
            yes_no(ev.off).to_string(),
            yes_no(ev.excluded).to_string(),
        ]);
    }

    table.render()
}
