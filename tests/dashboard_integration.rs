use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};
use serde_json::json;

use taskboard_cli::dashboard::{
    in_progress_projects, overdue_tasks, recent_tasks, upcoming_deadlines, DashboardSummary,
};
use taskboard_cli::{Project, Task, TaskStatus};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn task(id: &str, status: &str, due_in_days: Option<i64>) -> Task {
    let due = due_in_days.map(|d| (today() + Duration::days(d)).format("%Y-%m-%d").to_string());
    serde_json::from_value(json!({
        "_id": id,
        "title": format!("Task {}", id),
        "status": status,
        "assignee": "me",
        "dueDate": due,
    }))
    .unwrap()
}

fn project(id: &str, status: &str, member: &str, updated: &str) -> Project {
    serde_json::from_value(json!({
        "_id": id,
        "name": format!("Project {}", id),
        "status": status,
        "members": [member],
        "updatedAt": updated,
    }))
    .unwrap()
}

#[test]
fn upcoming_deadlines_stay_inside_window() {
    let tasks = vec![
        task("past", "todo", Some(-1)),
        task("today", "todo", Some(0)),
        task("edge", "todo", Some(14)),
        task("beyond", "todo", Some(15)),
        task("done", "completed", Some(2)),
        task("undated", "todo", None),
    ];

    let ids: Vec<&str> = upcoming_deadlines(&tasks, today()).iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["today", "edge"]);
}

#[test]
fn upcoming_deadlines_sorted_and_capped() {
    let tasks: Vec<Task> = [9, 3, 7, 1, 12, 5, 2]
        .iter()
        .map(|d| task(&format!("t{}", d), "in-progress", Some(*d)))
        .collect();

    let upcoming = upcoming_deadlines(&tasks, today());
    let ids: Vec<&str> = upcoming.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3", "t5", "t7"]);
}

fn due_at_local(id: &str, date: NaiveDate, hour: u32, minute: u32) -> Task {
    let local = Local
        .from_local_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
        .earliest()
        .unwrap();
    serde_json::from_value(json!({
        "_id": id,
        "title": format!("Task {}", id),
        "dueDate": local.with_timezone(&Utc).to_rfc3339(),
    }))
    .unwrap()
}

#[test]
fn deadlines_use_the_local_calendar_day() {
    // Minutes off the quarter hour so no offset lands on a UTC midnight
    let tasks = vec![
        due_at_local("morning", today(), 0, 17),
        due_at_local("tonight", today(), 23, 43),
        due_at_local("last-night", today() - Duration::days(1), 23, 43),
    ];

    let upcoming: Vec<&str> = upcoming_deadlines(&tasks, today()).iter().map(|t| t.id.as_str()).collect();
    assert_eq!(upcoming, vec!["morning", "tonight"]);

    let overdue: Vec<&str> = overdue_tasks(&tasks, today()).iter().map(|t| t.id.as_str()).collect();
    assert_eq!(overdue, vec!["last-night"]);
}

#[test]
fn recent_tasks_only_include_the_user() {
    let mut tasks: Vec<Task> = (0..7).map(|i| task(&format!("t{}", i), "todo", None)).collect();
    tasks.push(
        serde_json::from_value(json!({"_id": "other", "title": "Someone else's", "assignee": "them"})).unwrap(),
    );

    let recent = recent_tasks(&tasks, "me");
    assert_eq!(recent.len(), 5);
    assert!(recent.iter().all(|t| t.id != "other"));
}

#[test]
fn in_progress_projects_newest_first() {
    let projects = vec![
        project("a", "in-progress", "me", "2026-10-01"),
        project("b", "in-progress", "me", "2026-10-10"),
        project("c", "planning", "me", "2026-10-12"),
        project("d", "in-progress", "me", "2026-09-01"),
        project("e", "in-progress", "me", "2026-10-05"),
        project("f", "in-progress", "someone", "2026-10-15"),
    ];

    let ids: Vec<&str> = in_progress_projects(&projects, "me").iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "e", "a"]);
}

#[test]
fn summary_counts() {
    let tasks = vec![
        task("1", "completed", None),
        task("2", "todo", Some(-3)),
        task("3", "review", Some(1)),
        task("4", "completed", Some(-1)),
    ];
    let projects = vec![project("p", "in-progress", "me", "2026-10-01")];

    let summary = DashboardSummary::build(&projects, &tasks, "me", today());
    assert_eq!(summary.total_projects, 1);
    assert_eq!(summary.total_tasks, 4);
    assert_eq!(summary.overdue, 1);
    assert_eq!(summary.status_counts[&TaskStatus::Completed], 2);
    assert_eq!(summary.status_counts[&TaskStatus::InProgress], 0);
    assert_eq!(summary.completion_percent(), 50);
}
