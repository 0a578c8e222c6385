mod common;
use common::{off, temp_out, utc, work};

use std::fs;
use std::path::Path;
use timesheet::core::backup::{BackupLogic, RestoreStats};
use timesheet::db::queries::insert_event;
use timesheet::db::settings::{list_settings, upsert_setting};
use timesheet::db::{DbPool, EventStore};
use timesheet::models::backup::BackupDocument;
use timesheet::models::event::Event;
use timesheet::models::setting::Setting;

fn populated_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open");
    upsert_setting(&pool.conn, "workday", "450").unwrap();
    upsert_setting(&pool.conn, "break", "30").unwrap();
    insert_event(&pool.conn, &work("2010-01-01", "08:00", "16:00", false)).unwrap();
    insert_event(&pool.conn, &work("2010-01-02", "09:00", "11:30", true)).unwrap();
    insert_event(&pool.conn, &off("2010-01-04")).unwrap();
    pool
}

/// Events without their generated ids
fn event_bodies(pool: &DbPool) -> Vec<Event> {
    pool.list_events()
        .unwrap()
        .into_iter()
        .map(|e| Event { id: 0, ..e })
        .collect()
}

fn settings_of(pool: &DbPool) -> Vec<Setting> {
    list_settings(&pool.conn).unwrap()
}

#[test]
fn test_backup_document_wire_format() {
    let doc = BackupLogic::snapshot(&populated_pool()).unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["Settings"][0]["Key"], "break");
    assert_eq!(json["Settings"][0]["Value"], "30");
    assert_eq!(json["Events"][0]["Start"], "2010-01-01T08:00:00Z");
    assert_eq!(json["Events"][0]["End"], "2010-01-01T16:00:00Z");
    assert_eq!(json["Events"][1]["Excluded"], true);
    assert_eq!(json["Events"][2]["Off"], true);
}

#[test]
fn test_backup_document_accepts_offset_timestamps() {
    let raw = r#"{
        "Settings": [{"Key": "workday", "Value": "450"}],
        "Events": [{
            "Start": "2010-01-01T09:00:00+01:00",
            "End": "2010-01-01T11:00:00+01:00",
            "Excluded": false,
            "Off": false
        }]
    }"#;

    let doc: BackupDocument = serde_json::from_str(raw).unwrap();
    assert_eq!(doc.events[0].start, utc("2010-01-01", "08:00"));
    assert_eq!(doc.events[0].end, utc("2010-01-01", "10:00"));
}

#[test]
fn test_round_trip_empty_store() {
    let out = temp_out("backup_round_trip_empty", "json");

    let source = DbPool::in_memory().unwrap();
    BackupLogic::backup(&source, Path::new(&out), false).unwrap();

    let mut target = populated_pool();
    let stats = BackupLogic::restore(&mut target, Path::new(&out)).unwrap();

    assert_eq!(
        stats,
        RestoreStats {
            settings: 0,
            events: 0
        }
    );
    assert!(target.list_events().unwrap().is_empty());
    assert!(settings_of(&target).is_empty());
}

#[test]
fn test_round_trip_populated_store() {
    let out = temp_out("backup_round_trip_populated", "json");

    let source = populated_pool();
    let written = BackupLogic::backup(&source, Path::new(&out), false).unwrap();
    assert_eq!(written, Path::new(&out));

    let mut target = DbPool::in_memory().unwrap();
    upsert_setting(&target.conn, "stale", "1").unwrap();
    insert_event(&target.conn, &work("1999-12-31", "08:00", "09:00", false)).unwrap();

    BackupLogic::restore(&mut target, Path::new(&out)).unwrap();

    assert_eq!(event_bodies(&target), event_bodies(&source));
    assert_eq!(settings_of(&target), settings_of(&source));
}

#[test]
fn test_round_trip_compressed() {
    let out = temp_out("backup_round_trip_zip", "json");
    let zip_path = Path::new(&out).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    let source = populated_pool();
    let written = BackupLogic::backup(&source, Path::new(&out), true).unwrap();
    assert_eq!(written, zip_path);
    assert!(!Path::new(&out).exists());

    let mut target = DbPool::in_memory().unwrap();
    BackupLogic::restore(&mut target, &written).unwrap();

    assert_eq!(event_bodies(&target), event_bodies(&source));
    assert_eq!(settings_of(&target), settings_of(&source));
}

#[test]
fn test_restore_malformed_document_keeps_existing_data() {
    let out = temp_out("backup_malformed", "json");
    fs::write(&out, r#"{"Settings": [{"Key": "workday"}], "Events": "#).unwrap();

    let mut pool = populated_pool();
    let before = event_bodies(&pool);

    assert!(BackupLogic::restore(&mut pool, Path::new(&out)).is_err());
    assert_eq!(event_bodies(&pool), before);
    assert_eq!(settings_of(&pool).len(), 2);
}

#[test]
fn test_restore_keeps_negative_intervals() {
    let doc = BackupDocument::new(
        &[],
        &[Event::work(
            utc("2010-01-01", "10:00"),
            utc("2010-01-01", "08:00"),
            false,
        )],
    );

    let mut pool = DbPool::in_memory().unwrap();
    BackupLogic::restore_document(&mut pool, &doc).unwrap();

    let events = pool.list_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].duration_minutes(), -120);
}

#[test]
fn test_round_trip_keeps_fractional_seconds() {
    let raw = r#"{
        "Settings": [],
        "Events": [{
            "Start": "2010-01-01T08:00:00.750Z",
            "End": "2010-01-01T09:00:00Z",
            "Excluded": false,
            "Off": false
        }]
    }"#;
    let doc: BackupDocument = serde_json::from_str(raw).unwrap();

    let mut pool = DbPool::in_memory().unwrap();
    BackupLogic::restore_document(&mut pool, &doc).unwrap();

    let events = pool.list_events().unwrap();
    assert_eq!(events[0].start, doc.events[0].start);
    assert_eq!(events[0].duration_minutes(), 59);

    let out = temp_out("backup_round_trip_fractional", "json");
    BackupLogic::backup(&pool, Path::new(&out), false).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["Events"][0]["Start"], "2010-01-01T08:00:00.750Z");

    let mut target = DbPool::in_memory().unwrap();
    BackupLogic::restore(&mut target, Path::new(&out)).unwrap();
    assert_eq!(event_bodies(&target), event_bodies(&pool));
}

#[test]
fn test_sub_second_starts_sort_chronologically() {
    let pool = DbPool::in_memory().unwrap();
    let later = Event::work(
        utc("2010-01-01", "08:00") + chrono::Duration::milliseconds(500),
        utc("2010-01-01", "09:00"),
        false,
    );
    insert_event(&pool.conn, &later).unwrap();
    insert_event(&pool.conn, &work("2010-01-01", "08:00", "09:00", false)).unwrap();

    let starts: Vec<_> = pool.list_events().unwrap().iter().map(|e| e.start).collect();
    assert_eq!(starts, vec![utc("2010-01-01", "08:00"), later.start]);
}

#[test]
fn test_restore_failing_insert_rolls_back() {
    let mut pool = populated_pool();
    let events_before = event_bodies(&pool);
    let settings_before = settings_of(&pool);

    pool.conn
        .execute_batch(
            "CREATE TRIGGER reject_2011 BEFORE INSERT ON events
             WHEN NEW.start_at >= '2011'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

    let doc = BackupDocument::new(
        &[Setting {
            key: "workday".to_string(),
            value: "300".to_string(),
        }],
        &[
            work("2010-06-01", "08:00", "12:00", false),
            work("2011-06-01", "08:00", "12:00", false),
        ],
    );

    assert!(BackupLogic::restore_document(&mut pool, &doc).is_err());
    assert_eq!(event_bodies(&pool), events_before);
    assert_eq!(settings_of(&pool), settings_before);
}
