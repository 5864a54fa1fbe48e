use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde_json::json;

use crate::cli::build_cli;
use crate::cli_context::CliContextBuilder;
use crate::commands::auth::{apply_prompt_key, PromptStep};
use crate::commands::handle_auth;

fn token_with(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{}.{}.signature", header, payload)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn test_whoami_reports_expired_token_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let token = token_with(json!({ "id": "u1", "email": "ada@example.com", "exp": 1000 }));
    let mut context = CliContextBuilder::new()
        .with_config_path(dir.path().join("config.json"))
        .with_token(token.clone())
        // Nothing listens here; any request would fail the command
        .with_api_url("http://127.0.0.1:9/api/")
        .build()
        .unwrap();

    let matches = build_cli()
        .try_get_matches_from(["taskboard", "auth", "whoami"])
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();

    let result = handle_auth(&mut context, sub).await;
    assert!(result.is_ok(), "whoami failed: {:?}", result.err());
    assert_eq!(context.token(), Some(token.as_str()));
}

#[test]
fn test_prompt_keys_edit_buffer() {
    let mut buffer = String::new();
    for c in "hunter2".chars() {
        assert_eq!(apply_prompt_key(&mut buffer, key(KeyCode::Char(c))), PromptStep::Continue);
    }
    apply_prompt_key(&mut buffer, key(KeyCode::Backspace));
    assert_eq!(buffer, "hunter");

    assert_eq!(apply_prompt_key(&mut buffer, key(KeyCode::Enter)), PromptStep::Done);
    assert_eq!(buffer, "hunter");
}

#[test]
fn test_prompt_cancel_and_release_events() {
    let mut buffer = String::from("secret");

    let mut release = key(KeyCode::Char('x'));
    release.kind = KeyEventKind::Release;
    assert_eq!(apply_prompt_key(&mut buffer, release), PromptStep::Continue);
    assert_eq!(buffer, "secret");

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(apply_prompt_key(&mut buffer, ctrl_c), PromptStep::Cancelled);
    assert_eq!(apply_prompt_key(&mut buffer, key(KeyCode::Esc)), PromptStep::Cancelled);
}
