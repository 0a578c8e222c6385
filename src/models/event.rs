use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// One logged work interval, or an off-day marker when `off` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub start: DateTime<Utc>, // ⇔ events.start_at (TEXT, RFC 3339 UTC)
    pub end: DateTime<Utc>,   // ⇔ events.end_at   (TEXT, RFC 3339 UTC)
    pub excluded: bool,       // ⇔ events.excluded (INT 0/1)
    pub off: bool,            // ⇔ events.off      (INT 0/1)
}

impl Event {
    /// Work interval not yet stored (`id = 0`).
    pub fn work(start: DateTime<Utc>, end: DateTime<Utc>, excluded: bool) -> Self {
        Self {
            id: 0,
            start,
            end,
            excluded,
            off: false,
        }
    }

    /// Day-off marker: zero length interval at midnight UTC.
    pub fn day_off(date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        Self {
            id: 0,
            start: midnight,
            end: midnight,
            excluded: false,
            off: true,
        }
    }

    /// Interval length in whole minutes. Negative when `end < start`.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d %H:%M").to_string()
    }
}
