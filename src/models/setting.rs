/// Expected minutes of work per day.
pub const WORKDAY_KEY: &str = "workday";
/// Minutes deducted per day unless the day is excluded.
pub const BREAK_KEY: &str = "break";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
}
