use std::fs;

use crate::config::{load_config_from, save_config_to, Config, CurrentProject};

#[test]
fn test_missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.json"));

    assert!(config.token.is_none());
    assert!(!config.dark_mode);
    assert!(!config.sidebar_collapsed);
}

#[test]
fn test_corrupt_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let config = load_config_from(&path);
    assert!(config.token.is_none());
}

#[test]
fn test_config_round_trip_uses_camel_case_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        token: Some("abc".to_string()),
        dark_mode: true,
        sidebar_collapsed: true,
        current_project: Some(CurrentProject {
            workspace_id: "ws".to_string(),
            project_id: "p".to_string(),
            name: None,
        }),
        ..Config::default()
    };
    save_config_to(&config, &path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"darkMode\": true"));
    assert!(raw.contains("\"sidebarCollapsed\": true"));
    assert!(raw.contains("\"currentProject\""));

    let loaded = load_config_from(&path);
    assert_eq!(loaded.token.as_deref(), Some("abc"));
    assert!(loaded.dark_mode);
    assert_eq!(loaded.current_project, config.current_project);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"darkMode": true}"#).unwrap();

    let config = load_config_from(&path);
    assert!(config.dark_mode);
    assert!(config.current_project.is_none());
}

#[test]
fn test_clear_session_keeps_preferences() {
    let mut config = Config {
        token: Some("abc".to_string()),
        dark_mode: true,
        ..Config::default()
    };
    config.clear_session();

    assert!(config.token.is_none());
    assert!(config.dark_mode);
}
