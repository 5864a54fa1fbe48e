use crate::cli::build_cli;

#[test]
fn test_cli_definition_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn test_scope_flags_work_before_and_after_subcommand() {
    let matches = build_cli()
        .try_get_matches_from(["taskboard", "tasks", "--project", "p1", "list", "--workspace", "w1", "--mine"])
        .unwrap();

    let (_, tasks) = matches.subcommand().unwrap();
    let (name, list) = tasks.subcommand().unwrap();
    assert_eq!(name, "list");
    assert_eq!(list.get_one::<String>("project").map(String::as_str), Some("p1"));
    assert_eq!(list.get_one::<String>("workspace").map(String::as_str), Some("w1"));
    assert!(list.get_flag("mine"));
}

#[test]
fn test_list_format_defaults_to_simple() {
    let matches = build_cli()
        .try_get_matches_from(["taskboard", "workspaces", "list"])
        .unwrap();
    let (_, ws) = matches.subcommand().unwrap();
    let (_, list) = ws.subcommand().unwrap();
    assert_eq!(list.get_one::<String>("format").map(String::as_str), Some("simple"));
}

#[test]
fn test_prefs_rejects_unknown_value() {
    assert!(build_cli()
        .try_get_matches_from(["taskboard", "prefs", "dark-mode", "sometimes"])
        .is_err());
}

#[test]
fn test_watch_interval_must_be_positive() {
    assert!(build_cli()
        .try_get_matches_from(["taskboard", "notifications", "watch", "--interval", "0"])
        .is_err());
    assert!(build_cli()
        .try_get_matches_from(["taskboard", "notifications", "watch", "--interval", "10"])
        .is_ok());
}

#[test]
fn test_interactive_alias() {
    let matches = build_cli().try_get_matches_from(["taskboard", "tui"]).unwrap();
    assert_eq!(matches.subcommand_name(), Some("interactive"));
}

#[test]
fn test_user_update_and_unread_count() {
    let matches = build_cli()
        .try_get_matches_from(["taskboard", "users", "update", "u1", "--name", "Ada"])
        .unwrap();
    let (_, users) = matches.subcommand().unwrap();
    let (name, update) = users.subcommand().unwrap();
    assert_eq!(name, "update");
    assert_eq!(update.get_one::<String>("name").map(String::as_str), Some("Ada"));
    assert!(update.get_one::<String>("email").is_none());

    assert!(build_cli()
        .try_get_matches_from(["taskboard", "notifications", "count"])
        .is_ok());
}
