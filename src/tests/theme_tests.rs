use crate::formatting::theme::{apply_dark_mode, current_theme, SemanticColor, ColorTheme, theme_color, ThemedColorize};
use crate::formatting::theme::helpers::{status_color, priority_color, priority_symbol};
use crate::models::{TaskPriority, TaskStatus};
use colored::Color;

#[test]
fn test_default_theme_is_light() {
    let theme = ColorTheme::default();
    assert!(!theme.dark);

    assert_eq!(theme.get(SemanticColor::StatusCompleted), Color::Green);
    assert_eq!(theme.get(SemanticColor::StatusInProgress), Color::Yellow);
    assert_eq!(theme.get(SemanticColor::PriorityHigh), Color::Red);
    assert_eq!(theme.get(SemanticColor::Primary), Color::Black);
}

#[test]
fn test_dark_theme_swaps_text_colors() {
    let theme = ColorTheme::for_mode(true);
    assert!(theme.dark);
    assert_eq!(theme.get(SemanticColor::Primary), Color::White);
    // Status colors are shared between modes
    assert_eq!(theme.get(SemanticColor::StatusReview), Color::Magenta);
}

#[test]
fn test_theme_set_overrides() {
    let mut theme = ColorTheme::light();
    theme.set(SemanticColor::Today, Color::Cyan);
    assert_eq!(theme.get(SemanticColor::Today), Color::Cyan);
}

#[test]
fn test_status_color_helper() {
    assert_eq!(status_color(TaskStatus::Todo), SemanticColor::StatusTodo);
    assert_eq!(status_color(TaskStatus::InProgress), SemanticColor::StatusInProgress);
    assert_eq!(status_color(TaskStatus::Review), SemanticColor::StatusReview);
    assert_eq!(status_color(TaskStatus::Completed), SemanticColor::StatusCompleted);
}

#[test]
fn test_priority_helpers() {
    assert_eq!(priority_color(TaskPriority::Low), SemanticColor::PriorityLow);
    assert_eq!(priority_color(TaskPriority::High), SemanticColor::PriorityHigh);

    assert_eq!(priority_symbol(TaskPriority::Low), "◦");
    assert_eq!(priority_symbol(TaskPriority::Medium), "•");
    assert_eq!(priority_symbol(TaskPriority::High), "▲");
}

#[test]
fn test_themed_colorize() {
    let colored = "Error message".with_theme(SemanticColor::Error);
    assert!(format!("{}", colored).contains("Error message"));
}

#[test]
fn test_theme_color_function() {
    // Same in both palettes, so safe against other tests switching modes
    assert_eq!(theme_color(SemanticColor::Success), Color::Green);
    assert_eq!(theme_color(SemanticColor::Warning), Color::Yellow);
}

#[test]
fn test_apply_dark_mode_switches_global_theme() {
    apply_dark_mode(true);
    assert!(current_theme().dark);
    apply_dark_mode(false);
    assert!(!current_theme().dark);
}

#[test]
fn test_project_detail_header_is_themed_then_bold() {
    use crate::formatting::tables::print_project_detail;
    use crate::models::{Project, Task};
    use colored::Colorize;

    let project: Project = serde_json::from_value(serde_json::json!({
        "_id": "p1", "name": "Launch", "status": "in-progress"
    }))
    .unwrap();
    let tasks: Vec<Task> = vec![serde_json::from_value(serde_json::json!({
        "_id": "t1", "title": "Ship it", "status": "done"
    }))
    .unwrap()];

    let header = "Launch".with_theme(SemanticColor::Project).bold();
    assert!(header.fgcolor().is_some());

    print_project_detail(&project, &tasks, chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
}
