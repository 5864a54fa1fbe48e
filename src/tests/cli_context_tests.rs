use crate::cli_context::{CliContext, CliContextBuilder};
use crate::config::{load_config_from, CurrentProject};
use crate::error::TaskboardError;
use crate::models::{AuthResponse, User};

fn current(workspace: &str, project: &str) -> CurrentProject {
    CurrentProject {
        workspace_id: workspace.to_string(),
        project_id: project.to_string(),
        name: Some("Launch".to_string()),
    }
}

#[test]
fn test_cli_context_new_has_no_session() {
    let context = CliContext::new();
    assert!(!context.has_token());
    assert!(context.config().current_project.is_none());
}

#[test]
fn test_cli_context_builder_with_token() {
    let context = CliContextBuilder::new()
        .with_token("test-token")
        .build();

    let context = context.unwrap();
    assert!(context.has_token());
    assert_eq!(context.token(), Some("test-token"));
}

#[test]
fn test_verified_client_without_token() {
    let dir = tempfile::tempdir().unwrap();
    let mut context = CliContextBuilder::new()
        .with_config_path(dir.path().join("config.json"))
        .build()
        .unwrap();

    match context.verified_client() {
        Err(TaskboardError::NotAuthenticated) => {}
        Err(e) => panic!("Expected NotAuthenticated, got {}", e),
        Ok(_) => panic!("Expected NotAuthenticated"),
    }
}

#[test]
fn test_verified_client_is_cached() {
    let mut context = CliContextBuilder::new()
        .with_token("test-token")
        .with_api_url("http://localhost:5000/api/")
        .build()
        .unwrap();

    let first = context.verified_client().unwrap();
    let second = context.verified_client().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert!(first.is_authenticated());
}

#[test]
fn test_resolve_scope_prefers_explicit_ids() {
    let context = CliContextBuilder::new()
        .with_token("t")
        .with_current_project(current("ws-1", "p-1"))
        .build()
        .unwrap();

    let scope = context.resolve_scope(Some("ws-2"), Some("p-2")).unwrap();
    assert_eq!(scope.workspace_id, "ws-2");
    assert_eq!(scope.project_id, "p-2");

    // Missing pieces fall back to the current project
    let scope = context.resolve_scope(None, Some("p-3")).unwrap();
    assert_eq!(scope.workspace_id, "ws-1");
    assert_eq!(scope.project_id, "p-3");
}

#[test]
fn test_resolve_scope_without_current_project() {
    let context = CliContextBuilder::new().with_token("t").build().unwrap();

    match context.resolve_scope(None, None) {
        Err(TaskboardError::InvalidInput(msg)) => assert!(msg.contains("No project selected")),
        _ => panic!("Expected InvalidInput"),
    }
    assert!(context.resolve_workspace(Some("ws-9")).is_ok());
    assert!(context.resolve_workspace(None).is_err());
}

#[test]
fn test_session_round_trip_through_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let mut context = CliContextBuilder::new()
        .with_config_path(&path)
        .build()
        .unwrap();

    context
        .set_session(AuthResponse {
            token: "jwt-token".to_string(),
            user: User {
                id: "u1".to_string(),
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                avatar: None,
                role: None,
            },
        })
        .unwrap();

    let saved = load_config_from(&path);
    assert_eq!(saved.token.as_deref(), Some("jwt-token"));
    assert_eq!(saved.user.map(|u| u.id), Some("u1".to_string()));

    context.clear_session().unwrap();
    let saved = load_config_from(&path);
    assert!(saved.token.is_none());
    assert!(saved.user.is_none());
}

#[test]
fn test_unauthorized_clears_stored_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut context = CliContextBuilder::new()
        .with_config_path(&path)
        .with_token("expired")
        .with_current_project(current("ws-1", "p-1"))
        .build()
        .unwrap();

    context.handle_error(&TaskboardError::NotFound("task".to_string()));
    assert!(context.has_token());

    context.handle_error(&TaskboardError::Unauthorized);
    assert!(context.config().token.is_none());
    assert!(load_config_from(&path).token.is_none());
}

fn saved_session(path: &std::path::Path) {
    let mut context = CliContextBuilder::new()
        .with_config_path(path)
        .build()
        .unwrap();
    context
        .set_session(AuthResponse {
            token: "stored-token".to_string(),
            user: User {
                id: "u-stored".to_string(),
                name: "Stored User".to_string(),
                email: "stored@example.com".to_string(),
                avatar: None,
                role: None,
            },
        })
        .unwrap();
}

#[test]
fn test_rejected_env_token_keeps_stored_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    saved_session(&path);

    let mut context = CliContextBuilder::new()
        .with_config_path(&path)
        .with_token_override("env-token")
        .build()
        .unwrap();
    assert!(context.uses_token_override());
    assert_eq!(context.token(), Some("env-token"));

    context.handle_error(&TaskboardError::Unauthorized);
    assert_eq!(context.config().token.as_deref(), Some("stored-token"));
    assert_eq!(load_config_from(&path).token.as_deref(), Some("stored-token"));
}

#[tokio::test]
async fn test_current_user_with_env_token_skips_saved_user() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    saved_session(&path);

    let mut context = CliContextBuilder::new()
        .with_config_path(&path)
        .with_token_override("env-token")
        .with_api_url("http://127.0.0.1:9/api/")
        .build()
        .unwrap();

    // Nothing listens on the discard port, so only a cache hit could succeed
    match context.current_user().await {
        Err(TaskboardError::RequestError(_)) => {}
        Err(e) => panic!("Expected RequestError, got {}", e),
        Ok(user) => panic!("Returned cached user {}", user.id),
    }
    assert_eq!(
        load_config_from(&path).user.map(|u| u.id),
        Some("u-stored".to_string())
    );
}
