use super::period::PeriodKey;

/// Expected / actual / difference triple for one year. All values in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub period: PeriodKey,
    pub expected: i64,
    pub total: i64,
    pub difference: i64,
}

/// Net worked minutes for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub period: PeriodKey,
    pub total: i64,
}
