use crate::client::rest::RestClient;
use crate::client::{decode_body, normalize_error, ProjectScope, TaskboardClient};
use crate::error::TaskboardError;
use crate::models::{Project, Task, Workspace};

#[test]
fn test_url_joining_tolerates_slashes() {
    let rest = RestClient::new("http://localhost:5000/api/", None).unwrap();
    assert_eq!(rest.base_url(), "http://localhost:5000/api");
    assert_eq!(rest.url("/workspaces"), "http://localhost:5000/api/workspaces");
    assert_eq!(rest.url("workspaces"), "http://localhost:5000/api/workspaces");
}

#[test]
fn test_scope_paths() {
    let scope = ProjectScope::new("ws1", "p1");
    assert_eq!(scope.project_path(), "/workspaces/ws1/projects/p1");
    assert_eq!(scope.tasks_path(), "/workspaces/ws1/projects/p1/tasks");
    assert_eq!(scope.task_path("t1"), "/workspaces/ws1/projects/p1/tasks/t1");
}

#[test]
fn test_token_with_newline_is_rejected() {
    match RestClient::new("http://localhost", Some("bad\ntoken")) {
        Err(TaskboardError::InvalidInput(_)) => {}
        _ => panic!("Expected InvalidInput"),
    }
}

#[tokio::test]
async fn test_unauthenticated_client_short_circuits() {
    let client = TaskboardClient::new("http://127.0.0.1:9", None).unwrap();
    assert!(!client.is_authenticated());

    match client.get_workspaces().await {
        Err(TaskboardError::NotAuthenticated) => {}
        _ => panic!("Expected NotAuthenticated before any request"),
    }
}

#[test]
fn test_normalize_error_status_mapping() {
    match normalize_error(401, r#"{"message":"jwt expired"}"#, Some("Unauthorized")) {
        TaskboardError::Unauthorized => {}
        other => panic!("Expected Unauthorized, got {:?}", other),
    }

    match normalize_error(404, r#"{"error":"Project not found"}"#, Some("Not Found")) {
        TaskboardError::NotFound(msg) => assert_eq!(msg, "Project not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }

    match normalize_error(400, r#"{"message":"Title is required"}"#, Some("Bad Request")) {
        TaskboardError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Title is required");
        }
        other => panic!("Expected Api, got {:?}", other),
    }
}

#[test]
fn test_normalize_error_falls_back_to_reason() {
    match normalize_error(502, "<html><body>Bad gateway</body></html>", Some("Bad Gateway")) {
        TaskboardError::Api { message, .. } => assert_eq!(message, "Bad Gateway"),
        other => panic!("Expected Api, got {:?}", other),
    }

    match normalize_error(500, "database unavailable", None) {
        TaskboardError::Api { message, .. } => assert_eq!(message, "database unavailable"),
        other => panic!("Expected Api, got {:?}", other),
    }
}

#[test]
fn test_decode_body_accepts_envelope_and_bare() {
    let wrapped: Vec<Workspace> =
        decode_body(r#"{"data":[{"_id":"w1","name":"Acme"}]}"#).unwrap();
    assert_eq!(wrapped[0].id, "w1");

    let bare: Vec<Workspace> = decode_body(r#"[{"id":"w2","name":"Beta"}]"#).unwrap();
    assert_eq!(bare[0].name, "Beta");
}

#[test]
fn test_decode_body_normalizes_project_shapes() {
    let project: Project = decode_body(
        r#"{"_id":"p1","title":"Website","status":"in_progress","targetDate":"2026-11-01","workspace":"w1"}"#,
    )
    .unwrap();
    assert_eq!(project.name, "Website");
    assert_eq!(project.workspace_id(), Some("w1"));
    assert!(project.deadline.is_some());
}

#[test]
fn test_decode_body_task_with_populated_refs() {
    let task: Task = decode_body(
        r#"{"id":"t1","title":"Ship","status":"review","priority":"urgent",
            "assignee":{"_id":"u1","name":"Ada"},"createdBy":"u2",
            "subtasks":[{"_id":"s1","title":"Write","done":true},{"_id":"s2","title":"Test"}]}"#,
    )
    .unwrap();
    assert!(task.is_assigned_to("u1"));
    assert!(task.is_created_by("u2"));
    assert_eq!(task.subtask_progress(), (1, 2));
}

#[test]
fn test_decode_body_rejects_garbage() {
    match decode_body::<Vec<Task>>("not json") {
        Err(TaskboardError::JsonError(_)) => {}
        _ => panic!("Expected JsonError"),
    }
}
