use chrono::NaiveDate;

use taskboard_cli::validation::{
    parse_date, validate_login, validate_project, validate_registration, validate_subtask, validate_task,
    validate_workspace,
};
use taskboard_cli::TaskboardError;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn project_rules() {
    assert!(validate_project(Some("Website"), None, Some(today()), today()).is_ok());

    match validate_project(Some("W"), None, None, today()) {
        Err(TaskboardError::Validation(msg)) => assert!(msg.contains("name")),
        other => panic!("Expected Validation, got {:?}", other),
    }

    let yesterday = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
    match validate_project(Some("Website"), None, Some(yesterday), today()) {
        Err(TaskboardError::Validation(msg)) => assert!(msg.contains("deadline")),
        other => panic!("Expected Validation, got {:?}", other),
    }

    let long = "x".repeat(501);
    assert!(validate_project(None, Some(&long), None, today()).is_err());
}

#[test]
fn task_rules() {
    assert!(validate_task(Some("Ship"), Some("notes"), None, today()).is_ok());
    assert!(validate_task(Some(&"t".repeat(101)), None, None, today()).is_err());
    assert!(validate_task(None, Some(&"d".repeat(1001)), None, today()).is_err());
    assert!(validate_subtask("").is_err());
    assert!(validate_subtask("x").is_ok());
}

#[test]
fn workspace_rules() {
    assert!(validate_workspace(Some("Acme"), None).is_ok());
    assert!(validate_workspace(Some(&"n".repeat(51)), None).is_err());
    assert!(validate_workspace(None, Some(&"d".repeat(201))).is_err());
}

#[test]
fn account_rules() {
    assert!(validate_login("ada@example.com", "secret").is_ok());
    assert!(validate_login("not-an-email", "secret").is_err());
    assert!(validate_login("ada@example.com", "").is_err());

    assert!(validate_registration("Ada", "ada@example.com", "secret").is_ok());
    match validate_registration("A", "bad", "123") {
        Err(TaskboardError::Validation(msg)) => {
            assert!(msg.contains("name"));
            assert!(msg.contains("email"));
            assert!(msg.contains("password"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn dates_parse_iso_only() {
    assert_eq!(parse_date("due", "2026-10-16").unwrap(), today());
    assert!(parse_date("due", "16.10.2026").is_err());
}
