use serde_json::json;

use taskboard_cli::commands::prefs::resolve_switch;
use taskboard_cli::navigation::{LoadRequest, NavTree, NodeRef};
use taskboard_cli::{Project, ProjectScope, Task, Workspace};

fn workspace(id: &str) -> Workspace {
    serde_json::from_value(json!({"_id": id, "name": format!("WS {}", id)})).unwrap()
}

fn project(id: &str) -> Project {
    serde_json::from_value(json!({"_id": id, "name": format!("Project {}", id)})).unwrap()
}

fn task(id: &str) -> Task {
    serde_json::from_value(json!({"_id": id, "title": format!("Task {}", id)})).unwrap()
}

#[test]
fn projects_are_requested_once() {
    let mut tree = NavTree::new(false);
    tree.set_workspaces(vec![workspace("w1"), workspace("w2")]);

    assert_eq!(
        tree.toggle_workspace("w1"),
        Some(LoadRequest::Projects { workspace_id: "w1".to_string() })
    );
    tree.set_projects("w1", vec![project("p1")]);

    // Collapse then expand again: cached
    assert_eq!(tree.toggle_workspace("w1"), None);
    assert_eq!(tree.toggle_workspace("w1"), None);
    assert!(tree.projects_loaded("w1"));
    assert!(!tree.projects_loaded("w2"));
}

#[test]
fn empty_project_list_counts_as_loaded() {
    let mut tree = NavTree::new(false);
    tree.set_workspaces(vec![workspace("w1")]);
    tree.toggle_workspace("w1");
    tree.set_projects("w1", Vec::new());

    tree.toggle_workspace("w1");
    assert_eq!(tree.toggle_workspace("w1"), None);
}

#[test]
fn visible_rows_follow_expansion() {
    let mut tree = NavTree::new(false);
    tree.set_workspaces(vec![workspace("w1"), workspace("w2")]);
    tree.toggle_workspace("w1");
    tree.set_projects("w1", vec![project("p1"), project("p2")]);

    let scope = ProjectScope::new("w1", "p1");
    assert_eq!(tree.toggle_project(&scope), Some(LoadRequest::Tasks(scope.clone())));
    tree.set_tasks(&scope, vec![task("t1")]);

    let rows = tree.visible_rows();
    let depths: Vec<usize> = rows.iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 1, 0]);
    assert_eq!(
        rows[2].node,
        NodeRef::Task { scope: scope.clone(), task_id: "t1".to_string() }
    );
    assert_eq!(tree.tasks_of(&scope).map(|t| t.len()), Some(1));

    tree.toggle_workspace("w1");
    assert_eq!(tree.visible_rows().len(), 2);
}

#[test]
fn refreshing_roots_keeps_loaded_children() {
    let mut tree = NavTree::new(false);
    tree.set_workspaces(vec![workspace("w1")]);
    tree.toggle_workspace("w1");
    tree.set_projects("w1", vec![project("p1")]);

    tree.set_workspaces(vec![workspace("w1"), workspace("w3")]);
    assert!(tree.projects_loaded("w1"));

    tree.invalidate();
    assert!(!tree.projects_loaded("w1"));
}

#[test]
fn sidebar_toggle() {
    let mut tree = NavTree::new(false);
    assert!(tree.toggle_collapsed());
    assert!(!tree.toggle_collapsed());

    assert!(resolve_switch(Some("on"), "on", false));
    assert!(!resolve_switch(Some("off"), "on", true));
    assert!(resolve_switch(Some("toggle"), "on", false));
    assert!(!resolve_switch(None, "on", true));
}
