#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use timesheet::models::event::Event;

pub fn ts() -> Command {
    cargo_bin_cmd!("timesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB (schema + default settings) without touching the config file
pub fn init_db(db_path: &str) {
    ts().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB, set workday/break and log a small dataset
pub fn init_db_with_data(db_path: &str, workday: &str, break_minutes: &str) {
    init_db(db_path);

    ts().args(["--db", db_path, "setting", "set", "workday", workday])
        .assert()
        .success();
    ts().args(["--db", db_path, "setting", "set", "break", break_minutes])
        .assert()
        .success();

    for date in ["2010-01-01", "2010-01-02", "2010-01-03"] {
        ts().args(["--db", db_path, "add", date, "08:00", "10:00"])
            .assert()
            .success();
    }
}

pub fn utc(date: &str, time: &str) -> DateTime<Utc> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date");
    let t = NaiveTime::parse_from_str(time, "%H:%M").expect("valid test time");
    d.and_time(t).and_utc()
}

/// Work interval on one date
pub fn work(date: &str, from: &str, to: &str, excluded: bool) -> Event {
    Event::work(utc(date, from), utc(date, to), excluded)
}

/// Day-off marker
pub fn off(date: &str) -> Event {
    Event::day_off(NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date"))
}
