use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::fmt;

/// Grouping key for aggregation, derived from an event's start timestamp.
///
/// Ordering is chronological. The rendered form is fixed width
/// (`YYYY` or `YYYY-MM-DD`), so sorting the rendered strings gives the
/// same order for years 0..=9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodKey {
    Year(i32),
    Date(NaiveDate),
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKey::Year(y) => write!(f, "{:04}", y),
            PeriodKey::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// Aggregation granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Year,
    Day,
}

impl Granularity {
    pub fn key_for(self, ts: &DateTime<Utc>) -> PeriodKey {
        match self {
            Granularity::Year => PeriodKey::Year(ts.year()),
            Granularity::Day => PeriodKey::Date(ts.date_naive()),
        }
    }

    /// Column header used by the summary tables.
    pub fn label(self) -> &'static str {
        match self {
            Granularity::Year => "Year",
            Granularity::Day => "Date",
        }
    }
}
