use crate::cli::parser::{Commands, SummaryPeriod};
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::period::Granularity;
use crate::models::summary::{DayRow, SummaryRow};
use crate::ui::messages::header;
use crate::utils::colors::{color_for_difference, paint};
use crate::utils::formatting::format_duration;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match period.unwrap_or(SummaryPeriod::Year) {
            SummaryPeriod::Year => {
                let rows = Core::year_summary(&pool)?;
                header("Summary by year");
                print!("{}", render_years(&rows, cfg.separator()));
            }
            SummaryPeriod::Day => {
                let rows = Core::day_summary(&pool)?;
                header("Summary by day");
                print!("{}", render_days(&rows, cfg.separator()));
            }
        }
    }

    Ok(())
}

pub fn render_years(rows: &[SummaryRow], separator: char) -> String {
    let mut table = Table::new(
        vec![Granularity::Year.label(), "Expected", "Total", "Difference"],
        separator,
    );

    for row in rows {
        table.add_row(vec![
            row.period.to_string(),
            format_duration(row.expected),
            format_duration(row.total),
            paint(
                &format_duration(row.difference),
                color_for_difference(row.difference),
            ),
        ]);
    }

    table.render()
}

pub fn render_days(rows: &[DayRow], separator: char) -> String {
    let mut table = Table::new(vec![Granularity::Day.label(), "Hours"], separator);

    for row in rows {
        table.add_row(vec![row.period.to_string(), format_duration(row.total)]);
    }

    table.render()
}
