//! Grouping and filtering primitives over event snapshots.

use crate::models::event::Event;
use crate::models::period::{Granularity, PeriodKey};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Group events by the key `key_fn` derives from their start timestamp.
///
/// Only keys with at least one event appear. Input order is kept inside
/// each group and the input slice is never modified.
pub fn group_by_period<F>(events: &[Event], key_fn: F) -> BTreeMap<PeriodKey, Vec<Event>>
where
    F: Fn(&DateTime<Utc>) -> PeriodKey,
{
    let mut groups: BTreeMap<PeriodKey, Vec<Event>> = BTreeMap::new();

    for ev in events {
        groups.entry(key_fn(&ev.start)).or_default().push(ev.clone());
    }

    groups
}

/// True iff at least one event in the period carries the excluded flag.
///
/// A single excluded entry exempts the whole period from break deduction.
pub fn is_period_excluded(events: &[Event]) -> bool {
    events.iter().any(|e| e.excluded)
}

/// Sum of `end - start` in minutes. Negative intervals are summed as-is.
pub fn total_minutes(events: &[Event]) -> i64 {
    events.iter().map(Event::duration_minutes).sum()
}

/// Number of calendar days that are not excluded.
pub fn count_non_excluded_days(events: &[Event]) -> i64 {
    group_by_period(events, |ts| Granularity::Day.key_for(ts))
        .values()
        .filter(|day| !is_period_excluded(day))
        .count() as i64
}
