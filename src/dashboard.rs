//! Derived lists for the dashboard, computed from already-fetched data.

use chrono::{Duration, NaiveDate};
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::constants::{
    IN_PROGRESS_PROJECTS_LIMIT, RECENT_TASKS_LIMIT, UPCOMING_DEADLINES_LIMIT, UPCOMING_WINDOW_DAYS,
};
use crate::models::dates::local_date;
use crate::models::{Project, ProjectStatus, Task, TaskStatus};

/// Owner or listed member.
pub fn is_project_member(project: &Project, user_id: &str) -> bool {
    project.owner.as_ref().map(|o| o.is(user_id)).unwrap_or(false)
        || project.members.iter().any(|m| m.is(user_id))
}

/// Tasks the user created or is assigned to.
pub fn user_tasks<'a>(tasks: &'a [Task], user_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.is_created_by(user_id) || t.is_assigned_to(user_id))
        .collect()
}

pub fn recent_tasks<'a>(tasks: &'a [Task], user_id: &str) -> Vec<&'a Task> {
    let mut mine = user_tasks(tasks, user_id);
    mine.sort_by_key(|t| Reverse(t.created_at));
    mine.truncate(RECENT_TASKS_LIMIT);
    mine
}

pub fn in_progress_projects<'a>(projects: &'a [Project], user_id: &str) -> Vec<&'a Project> {
    let mut active: Vec<&Project> = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::InProgress && is_project_member(p, user_id))
        .collect();
    active.sort_by_key(|p| Reverse(p.last_activity()));
    active.truncate(IN_PROGRESS_PROJECTS_LIMIT);
    active
}

/// Open tasks due between today and the end of the window, soonest first.
pub fn upcoming_deadlines(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    let window_end = today + Duration::days(UPCOMING_WINDOW_DAYS);

    let mut upcoming: Vec<&Task> = tasks
        .iter()
        .filter(|t| !t.is_completed())
        .filter(|t| {
            t.due_date
                .map(|due| {
                    let due = local_date(due);
                    due >= today && due <= window_end
                })
                .unwrap_or(false)
        })
        .collect();

    upcoming.sort_by_key(|t| t.due_date);
    upcoming.truncate(UPCOMING_DEADLINES_LIMIT);
    upcoming
}

pub fn overdue_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    let mut overdue: Vec<&Task> = tasks
        .iter()
        .filter(|t| !t.is_completed())
        .filter(|t| t.due_date.map(|due| local_date(due) < today).unwrap_or(false))
        .collect();
    overdue.sort_by_key(|t| t.due_date);
    overdue
}

pub fn status_counts(tasks: &[Task]) -> HashMap<TaskStatus, usize> {
    let mut counts: HashMap<TaskStatus, usize> = TaskStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for task in tasks {
        *counts.entry(task.status).or_default() += 1;
    }
    counts
}

#[derive(Debug)]
pub struct DashboardSummary<'a> {
    pub total_projects: usize,
    pub total_tasks: usize,
    pub status_counts: HashMap<TaskStatus, usize>,
    pub overdue: usize,
    pub recent_tasks: Vec<&'a Task>,
    pub in_progress_projects: Vec<&'a Project>,
    pub upcoming_deadlines: Vec<&'a Task>,
}

impl<'a> DashboardSummary<'a> {
    pub fn build(projects: &'a [Project], tasks: &'a [Task], user_id: &str, today: NaiveDate) -> Self {
        Self {
            total_projects: projects.iter().filter(|p| is_project_member(p, user_id)).count(),
            total_tasks: tasks.len(),
            status_counts: status_counts(tasks),
            overdue: overdue_tasks(tasks, today).len(),
            recent_tasks: recent_tasks(tasks, user_id),
            in_progress_projects: in_progress_projects(projects, user_id),
            upcoming_deadlines: upcoming_deadlines(tasks, today),
        }
    }

    /// Share of tasks completed, 0..=100.
    pub fn completion_percent(&self) -> u8 {
        if self.total_tasks == 0 {
            return 0;
        }
        let done = self.status_counts.get(&TaskStatus::Completed).copied().unwrap_or(0);
        ((done * 100) / self.total_tasks) as u8
    }
}
