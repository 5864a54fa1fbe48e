use crate::error::{ErrorContext, TaskboardError};
use crate::taskboard_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));

    let taskboard_result = result.context("Failed to read config file");
    assert!(taskboard_result.is_err());

    match taskboard_result {
        Err(TaskboardError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected TaskboardError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Token not found");

    match result {
        Err(TaskboardError::Unknown(msg)) => assert_eq!(msg, "Token not found"),
        _ => panic!("Expected TaskboardError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied"
    ));

    let taskboard_result = result.with_context(|| {
        format!("Failed to upload file: {}", "/tmp/report.pdf")
    });

    match taskboard_result {
        Err(TaskboardError::Unknown(msg)) => {
            assert!(msg.contains("Failed to upload file: /tmp/report.pdf"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected TaskboardError::Unknown"),
    }
}

#[test]
fn test_taskboard_error_macro() {
    let error = taskboard_error!(Validation, "name: too short");
    match error {
        TaskboardError::Validation(msg) => assert_eq!(msg, "name: too short"),
        _ => panic!("Expected TaskboardError::Validation"),
    }

    let error = taskboard_error!(InvalidInput, "Unknown status: {}", "blocked");
    match error {
        TaskboardError::InvalidInput(msg) => assert_eq!(msg, "Unknown status: blocked"),
        _ => panic!("Expected TaskboardError::InvalidInput"),
    }
}

#[test]
fn test_auth_failure_classification() {
    assert!(TaskboardError::Unauthorized.is_auth_failure());
    assert!(TaskboardError::NotAuthenticated.is_auth_failure());
    assert!(!TaskboardError::NotFound("task".to_string()).is_auth_failure());

    assert!(TaskboardError::NotFound("task".to_string()).is_not_found());
    assert!(!TaskboardError::Api { status: 500, message: "boom".to_string() }.is_not_found());
}

#[test]
fn test_api_error_display() {
    let error = TaskboardError::Api { status: 422, message: "Title is required".to_string() };
    assert_eq!(error.to_string(), "API request failed (422): Title is required");
}
