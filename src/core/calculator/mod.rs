pub mod grouping;
pub mod summary;

pub use grouping::{count_non_excluded_days, group_by_period, is_period_excluded, total_minutes};
pub use summary::{summarize_by_day, summarize_by_year};
