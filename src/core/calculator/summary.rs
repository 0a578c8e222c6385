use crate::core::calculator::grouping::{
    count_non_excluded_days, group_by_period, is_period_excluded, total_minutes,
};
use crate::core::settings::WorkSettings;
use crate::models::event::Event;
use crate::models::period::Granularity;
use crate::models::summary::{DayRow, SummaryRow};

/// One row per year present in `events`, oldest first.
///
/// expected   = non-excluded days * workday
/// total      = worked minutes - non-excluded days * break
/// difference = total - expected
pub fn summarize_by_year(events: &[Event], settings: &WorkSettings) -> Vec<SummaryRow> {
    group_by_period(events, |ts| Granularity::Year.key_for(ts))
        .into_iter()
        .map(|(period, year_events)| {
            let days = count_non_excluded_days(&year_events);
            let expected = days * settings.workday_minutes;
            let total = total_minutes(&year_events) - days * settings.break_minutes;

            SummaryRow {
                period,
                expected,
                total,
                difference: total - expected,
            }
        })
        .collect()
}

/// One row per calendar day, oldest first.
///
/// The break is deducted unless the day is excluded. Days left with no
/// positive time are not reported.
pub fn summarize_by_day(events: &[Event], settings: &WorkSettings) -> Vec<DayRow> {
    group_by_period(events, |ts| Granularity::Day.key_for(ts))
        .into_iter()
        .filter_map(|(period, day_events)| {
            let mut total = total_minutes(&day_events);

            if !is_period_excluded(&day_events) {
                total -= settings.break_minutes;
            }

            (total > 0).then_some(DayRow { period, total })
        })
        .collect()
}
