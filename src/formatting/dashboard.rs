use colored::*;
use chrono::NaiveDate;

use super::theme::{SemanticColor, ThemedColorize};
use super::utils::*;
use crate::dashboard::DashboardSummary;
use crate::models::{TaskStatus, User};

pub fn print_dashboard(user: &User, summary: &DashboardSummary, today: NaiveDate) {
    println!("\n{} {}", "Welcome back,".bold(), extract_first_name(&user.name).with_theme(SemanticColor::User).bold());
    println!("{}", "═".repeat(80).blue());

    let count = |status: TaskStatus| summary.status_counts.get(&status).copied().unwrap_or(0);
    println!(
        "{}: {}   {}: {}   {}: {}   {}: {}",
        "Projects".dimmed(),
        summary.total_projects.to_string().bold(),
        "Tasks".dimmed(),
        summary.total_tasks.to_string().bold(),
        "Done".dimmed(),
        format!("{}%", summary.completion_percent()).green(),
        "Overdue".dimmed(),
        if summary.overdue > 0 {
            summary.overdue.to_string().red().bold()
        } else {
            summary.overdue.to_string().normal()
        }
    );
    println!(
        "{} {}  {} {}  {} {}  {} {}",
        status_icon(TaskStatus::Todo),
        count(TaskStatus::Todo),
        status_icon(TaskStatus::InProgress),
        count(TaskStatus::InProgress),
        status_icon(TaskStatus::Review),
        count(TaskStatus::Review),
        status_icon(TaskStatus::Completed),
        count(TaskStatus::Completed)
    );

    println!("\n{}", "Recent tasks".bold());
    println!("{}", "─".repeat(50).dimmed());
    if summary.recent_tasks.is_empty() {
        println!("{}", "  Nothing yet.".dimmed());
    }
    for task in &summary.recent_tasks {
        println!(
            "  {} {} {} {}",
            status_icon(task.status),
            truncate(&task.title, 50),
            format_status(task.status),
            format_relative_time(task.created_at).dimmed()
        );
    }

    println!("\n{}", "Projects in progress".bold());
    println!("{}", "─".repeat(50).dimmed());
    if summary.in_progress_projects.is_empty() {
        println!("{}", "  No active projects.".dimmed());
    }
    for project in &summary.in_progress_projects {
        let progress = project
            .progress
            .map(|p| format!("{:.0}%", p))
            .unwrap_or_default();
        println!(
            "  {} {} {} {}",
            "▸".cyan(),
            project.name.with_theme(SemanticColor::Project),
            progress.dimmed(),
            format!("deadline {}", format_date(project.deadline)).dimmed()
        );
    }

    println!("\n{}", "Upcoming deadlines".bold());
    println!("{}", "─".repeat(50).dimmed());
    if summary.upcoming_deadlines.is_empty() {
        println!("{}", "  Nothing due in the next two weeks.".dimmed());
    }
    for task in &summary.upcoming_deadlines {
        println!(
            "  {} {} {}",
            format_due(task.due_date, today).yellow(),
            truncate(&task.title, 50),
            format_priority(task.priority)
        );
    }
    println!();
}
