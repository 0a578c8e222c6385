use std::io::Cursor;
use timesheet::core::settings::WorkSettings;
use timesheet::core::setup::SetupLogic;
use timesheet::db::{DbPool, SettingsStore};
use timesheet::errors::AppError;

#[test]
fn test_setup_stores_both_settings() {
    let pool = DbPool::in_memory().unwrap();
    let mut input = Cursor::new("480\n45\n");
    let mut out = Vec::new();

    let settings = SetupLogic::run(&pool, &mut input, &mut out).unwrap();

    assert_eq!(settings, WorkSettings::new(480, 45));
    assert_eq!(pool.get_setting("workday").unwrap().as_deref(), Some("480"));
    assert_eq!(pool.get_setting("break").unwrap().as_deref(), Some("45"));

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Work day in minutes: "));
    assert!(printed.contains("Break in minutes: "));
}

#[test]
fn test_setup_replaces_existing_settings() {
    let pool = DbPool::in_memory().unwrap();
    SetupLogic::run(&pool, &mut Cursor::new("450\n30\n"), &mut Vec::new()).unwrap();
    SetupLogic::run(&pool, &mut Cursor::new("400\r\n0\r\n"), &mut Vec::new()).unwrap();

    assert_eq!(WorkSettings::load(&pool).unwrap(), WorkSettings::new(400, 0));
}

#[test]
fn test_setup_rejects_non_numeric_answers_before_writing() {
    let pool = DbPool::in_memory().unwrap();

    let res = SetupLogic::run(&pool, &mut Cursor::new("450\nlunch\n"), &mut Vec::new());

    assert!(matches!(res, Err(AppError::InvalidNumber(_))));
    assert_eq!(pool.get_setting("workday").unwrap(), None);
}

#[test]
fn test_setup_rejects_negative_and_missing_answers() {
    let pool = DbPool::in_memory().unwrap();

    let negative = SetupLogic::run(&pool, &mut Cursor::new("-5\n30\n"), &mut Vec::new());
    assert!(matches!(negative, Err(AppError::InvalidNumber(_))));

    let eof = SetupLogic::run(&pool, &mut Cursor::new(""), &mut Vec::new());
    assert!(matches!(eof, Err(AppError::InvalidNumber(_))));
}
