mod common;
use common::{off, utc, work};

use chrono::NaiveDate;
use timesheet::core::calculator::{
    count_non_excluded_days, group_by_period, is_period_excluded, summarize_by_day,
    summarize_by_year, total_minutes,
};
use timesheet::core::settings::WorkSettings;
use timesheet::models::event::Event;
use timesheet::models::period::{Granularity, PeriodKey};
use timesheet::utils::format_duration;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_format_duration_fixtures() {
    assert_eq!(format_duration(0), "0h 0m");
    assert_eq!(format_duration(60), "1h 0m");
    assert_eq!(format_duration(30), "0h 30m");
    assert_eq!(format_duration(125), "2h 5m");
}

#[test]
fn test_format_duration_keeps_sign_of_negative_values() {
    assert_eq!(format_duration(-30), "-0h 30m");
    assert_eq!(format_duration(-90), "-1h 30m");
    assert_eq!(format_duration(-1080), "-18h 0m");
}

#[test]
fn test_group_by_period_empty_input_gives_empty_map() {
    let groups = group_by_period(&[], |t| Granularity::Year.key_for(t));
    assert!(groups.is_empty());
}

#[test]
fn test_group_by_period_loses_and_duplicates_nothing() {
    let events = vec![
        work("2011-03-01", "08:00", "12:00", false),
        work("2010-01-01", "08:00", "10:00", true),
        work("2011-03-01", "13:00", "17:00", false),
        off("2010-06-15"),
        work("2010-01-01", "08:00", "10:00", true), // identical entries stay separate
    ];

    for granularity in [Granularity::Year, Granularity::Day] {
        let groups = group_by_period(&events, |t| granularity.key_for(t));
        let flat: Vec<&Event> = groups.values().flatten().collect();

        assert_eq!(flat.len(), events.len());
        for ev in &events {
            let in_input = events.iter().filter(|e| *e == ev).count();
            let in_groups = flat.iter().filter(|e| **e == ev).count();
            assert_eq!(in_input, in_groups);
        }
    }
}

#[test]
fn test_group_by_period_keys() {
    let events = vec![
        work("2011-03-01", "08:00", "12:00", false),
        work("2010-01-01", "08:00", "10:00", false),
        work("2010-01-02", "08:00", "10:00", false),
    ];

    let years: Vec<PeriodKey> = group_by_period(&events, |t| Granularity::Year.key_for(t))
        .into_keys()
        .collect();
    assert_eq!(years, vec![PeriodKey::Year(2010), PeriodKey::Year(2011)]);

    let days: Vec<PeriodKey> = group_by_period(&events, |t| Granularity::Day.key_for(t))
        .into_keys()
        .collect();
    assert_eq!(
        days,
        vec![
            PeriodKey::Date(date("2010-01-01")),
            PeriodKey::Date(date("2010-01-02")),
            PeriodKey::Date(date("2011-03-01")),
        ]
    );
}

#[test]
fn test_group_by_period_does_not_touch_input() {
    let events = vec![
        work("2011-03-01", "08:00", "12:00", false),
        work("2010-01-01", "08:00", "10:00", false),
    ];
    let before = events.clone();

    let _ = group_by_period(&events, |t| Granularity::Day.key_for(t));

    assert_eq!(events, before);
}

#[test]
fn test_period_key_rendering_is_fixed_width() {
    assert_eq!(PeriodKey::Year(2010).to_string(), "2010");
    assert_eq!(PeriodKey::Year(999).to_string(), "0999");
    assert_eq!(PeriodKey::Date(date("2010-01-02")).to_string(), "2010-01-02");

    // Chronological order and rendered string order agree
    assert!(PeriodKey::Year(999) < PeriodKey::Year(2010));
    assert!(PeriodKey::Year(999).to_string() < PeriodKey::Year(2010).to_string());
}

#[test]
fn test_is_period_excluded_any_rule() {
    assert!(!is_period_excluded(&[]));

    let none = vec![
        work("2010-01-01", "08:00", "10:00", false),
        work("2010-01-01", "11:00", "12:00", false),
    ];
    assert!(!is_period_excluded(&none));

    let one = vec![
        work("2010-01-01", "08:00", "10:00", false),
        work("2010-01-01", "11:00", "12:00", true),
    ];
    assert!(is_period_excluded(&one));

    let all = vec![work("2010-01-01", "08:00", "10:00", true)];
    assert!(is_period_excluded(&all));
}

#[test]
fn test_total_minutes() {
    assert_eq!(total_minutes(&[]), 0);

    let events = vec![
        work("2010-01-01", "08:00", "10:00", false),
        work("2010-01-01", "10:30", "11:15", false),
        off("2010-01-02"),
    ];
    assert_eq!(total_minutes(&events), 165);
}

#[test]
fn test_total_minutes_keeps_negative_intervals() {
    // end before start is not rejected by the engine; it is summed as-is
    let backwards = Event::work(
        utc("2010-01-01", "10:00"),
        utc("2010-01-01", "08:00"),
        false,
    );
    assert_eq!(total_minutes(&[backwards.clone()]), -120);

    let mixed = vec![backwards, work("2010-01-01", "08:00", "11:00", false)];
    assert_eq!(total_minutes(&mixed), 60);
}

#[test]
fn test_count_non_excluded_days() {
    let events = vec![
        work("2010-01-01", "08:00", "10:00", true),
        work("2010-01-02", "08:00", "10:00", false),
        work("2010-01-03", "08:00", "10:00", false),
        work("2010-01-04", "08:00", "10:00", false),
        work("2010-01-05", "08:00", "10:00", true),
    ];
    assert_eq!(count_non_excluded_days(&events), 3);
}

#[test]
fn test_count_non_excluded_days_one_excluded_entry_excludes_the_day() {
    let events = vec![
        work("2010-01-01", "08:00", "10:00", false),
        work("2010-01-01", "18:00", "20:00", true),
        work("2010-01-02", "08:00", "10:00", false),
    ];
    assert_eq!(count_non_excluded_days(&events), 1);
    assert_eq!(count_non_excluded_days(&[]), 0);
}

#[test]
fn test_summarize_by_year_end_to_end() {
    let events = vec![
        work("2010-01-01", "08:00", "10:00", false),
        work("2010-01-02", "08:00", "10:00", false),
        work("2010-01-03", "08:00", "10:00", false),
    ];

    let rows = summarize_by_year(&events, &WorkSettings::new(0, 0));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].period, PeriodKey::Year(2010));
    assert_eq!(rows[0].period.to_string(), "2010");
    assert_eq!(rows[0].total, 360);
    assert_eq!(rows[0].expected, 0);
    assert_eq!(rows[0].difference, 360);
}

#[test]
fn test_summarize_by_year_applies_workday_and_break() {
    let events = vec![
        work("2010-01-01", "08:00", "16:00", false),
        work("2010-01-02", "08:00", "16:00", false),
        // excluded: no break, no expected hours
        work("2010-01-03", "10:00", "12:00", true),
    ];

    let rows = summarize_by_year(&events, &WorkSettings::new(450, 30));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].expected, 2 * 450);
    assert_eq!(rows[0].total, 480 + 480 + 120 - 2 * 30);
    assert_eq!(rows[0].difference, rows[0].total - rows[0].expected);
}

#[test]
fn test_summarize_by_year_off_day_counts_as_expected_day() {
    let events = vec![work("2010-01-01", "08:00", "16:00", false), off("2010-01-02")];

    let rows = summarize_by_year(&events, &WorkSettings::new(450, 30));

    assert_eq!(rows[0].expected, 900);
    assert_eq!(rows[0].total, 480 - 60);
    assert_eq!(rows[0].difference, 420 - 900);
}

#[test]
fn test_summarize_by_year_sorted_ascending() {
    let events = vec![
        work("2012-05-01", "08:00", "09:00", false),
        work("2009-05-01", "08:00", "09:00", false),
        work("2011-05-01", "08:00", "09:00", false),
    ];

    let periods: Vec<String> = summarize_by_year(&events, &WorkSettings::new(0, 0))
        .iter()
        .map(|r| r.period.to_string())
        .collect();

    assert_eq!(periods, vec!["2009", "2011", "2012"]);
}

#[test]
fn test_summarize_by_year_empty() {
    assert!(summarize_by_year(&[], &WorkSettings::new(450, 30)).is_empty());
}

#[test]
fn test_summarize_by_day_deducts_break_unless_excluded() {
    let events = vec![
        work("2010-01-02", "08:00", "10:00", true),
        work("2010-01-01", "08:00", "10:00", false),
        work("2010-01-01", "12:00", "13:00", false),
    ];

    let rows = summarize_by_day(&events, &WorkSettings::new(450, 30));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].period.to_string(), "2010-01-01");
    assert_eq!(rows[0].total, 180 - 30);
    assert_eq!(rows[1].period.to_string(), "2010-01-02");
    assert_eq!(rows[1].total, 120);
}

#[test]
fn test_summarize_by_day_drops_days_without_positive_time() {
    let events = vec![
        // 20 minutes minus a 30 minute break
        work("2010-01-01", "08:00", "08:20", false),
        // exactly the break
        work("2010-01-02", "08:00", "08:30", false),
        // day off: 0 minus break
        off("2010-01-03"),
        // excluded day off: 0, still not positive
        Event {
            excluded: true,
            ..off("2010-01-04")
        },
        work("2010-01-05", "08:00", "09:00", false),
    ];

    let rows = summarize_by_day(&events, &WorkSettings::new(450, 30));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].period.to_string(), "2010-01-05");
    assert_eq!(rows[0].total, 30);
}
