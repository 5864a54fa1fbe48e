use colored::*;
use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

use super::theme::helpers::{priority_color, priority_symbol, status_color};
use super::theme::{SemanticColor, ThemedColorize};
use super::utils::*;
use crate::models::{
    Member, Notification, Project, Subtask, Task, TaskFile, TaskStatus, User, UserRef, Workspace,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(OutputFormat::Simple),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}' (expected simple, table or json)", other)),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{} {}", "✗".red(), e),
    }
}

/// Green confirmation line.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message.green().bold());
}

/// Red failure line, printed to stderr.
pub fn print_failure(message: &str) {
    eprintln!("{} {}", "✗".red(), message.red());
}

pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{}: {}", label.bold(), value);
}

fn user_label(user: Option<&UserRef>) -> ColoredString {
    match user {
        Some(user) => extract_first_name(user.display_name()).with_theme(SemanticColor::User),
        None => "Unassigned".dimmed(),
    }
}

pub fn print_workspaces(workspaces: &[Workspace], format: OutputFormat) {
    if workspaces.is_empty() {
        println!("{}", "No workspaces found.".dimmed());
        return;
    }

    match format {
        OutputFormat::Json => print_json(workspaces),
        OutputFormat::Table => {
            println!("{}", "─".repeat(90).dimmed());
            println!(
                "{:<26} {:<30} {:<8} {:<20}",
                "ID".bold(),
                "Name".bold(),
                "Members".bold(),
                "Created".bold()
            );
            println!("{}", "─".repeat(90).dimmed());
            for ws in workspaces {
                println!(
                    "{:<26} {:<30} {:<8} {:<20}",
                    ws.id.dimmed(),
                    truncate(&ws.name, 30).with_theme(SemanticColor::Workspace),
                    ws.members.len(),
                    format_relative_time(ws.created_at).dimmed()
                );
            }
            println!("{}", "─".repeat(90).dimmed());
        }
        OutputFormat::Simple => {
            for ws in workspaces {
                println!("{} {} {}", "▸".cyan(), ws.name.bold(), format!("({})", ws.id).dimmed());
                if let Some(desc) = ws.description.as_deref().filter(|d| !d.trim().is_empty()) {
                    println!("  {}", truncate(&clean_description(desc), 70).dimmed());
                }
            }
        }
    }
}

pub fn print_workspace_detail(workspace: &Workspace) {
    println!("\n{}", "═".repeat(80).blue());
    println!("{}", workspace.name.bold().cyan());
    println!("{}", "─".repeat(80).dimmed());
    print_field("ID", workspace.id.dimmed());
    if let Some(owner) = &workspace.owner {
        print_field("Owner", owner.display_name().green());
    }
    print_field("Created", format_relative_time(workspace.created_at).dimmed());
    if let Some(desc) = workspace.description.as_deref().filter(|d| !d.trim().is_empty()) {
        println!("\n{}", desc);
    }
    if !workspace.members.is_empty() {
        println!("\n{}", "Members".bold());
        print_members(&workspace.members);
    }
    println!("{}", "═".repeat(80).blue());
}

pub fn print_members(members: &[Member]) {
    if members.is_empty() {
        println!("{}", "No members.".dimmed());
        return;
    }
    for member in members {
        println!(
            "  {} {} {}",
            member.user.display_name().with_theme(SemanticColor::User),
            format!("[{}]", member.role).yellow(),
            member.user.id().dimmed()
        );
    }
}

pub fn print_user_refs(users: &[UserRef]) {
    if users.is_empty() {
        println!("{}", "No members.".dimmed());
        return;
    }
    for user in users {
        println!("  {} {}", user.display_name().with_theme(SemanticColor::User), user.id().dimmed());
    }
}

pub fn print_projects(projects: &[Project], format: OutputFormat) {
    if projects.is_empty() {
        println!("{}", "No projects found.".dimmed());
        return;
    }

    match format {
        OutputFormat::Json => print_json(projects),
        OutputFormat::Table => {
            println!("{}", "─".repeat(100).dimmed());
            println!(
                "{:<26} {:<32} {:<12} {:<12} {:<8}",
                "ID".bold(),
                "Name".bold(),
                "Status".bold(),
                "Deadline".bold(),
                "Members".bold()
            );
            println!("{}", "─".repeat(100).dimmed());
            for project in projects {
                println!(
                    "{:<26} {:<32} {:<12} {:<12} {:<8}",
                    project.id.dimmed(),
                    truncate(&project.name, 32),
                    format_project_status(project.status),
                    format_date(project.deadline),
                    project.members.len()
                );
            }
            println!("{}", "─".repeat(100).dimmed());
        }
        OutputFormat::Simple => {
            println!("\n{}", "Projects".bold().blue());
            println!("{}", "═".repeat(80).blue());
            for project in projects {
                println!("\n{} {} {}", "▸".cyan(), project.name.bold(), format!("({})", project.id).dimmed());
                if let Some(desc) = project.description.as_deref().filter(|d| !d.trim().is_empty()) {
                    println!("  {}", truncate(&clean_description(desc), 70).dimmed());
                }
                println!(
                    "  {}: {} | {}: {} | {}: {}",
                    "Status".dimmed(),
                    format_project_status(project.status),
                    "Deadline".dimmed(),
                    format_date(project.deadline),
                    "Created".dimmed(),
                    format_relative_time(project.created_at).dimmed()
                );
            }
            println!("\n{}", "═".repeat(80).blue());
        }
    }
}

pub fn print_project_detail(project: &Project, tasks: &[Task], today: NaiveDate) {
    println!("\n{}", "═".repeat(80).blue());
    println!("{}", project.name.with_theme(SemanticColor::Project).bold());
    println!("{}", "─".repeat(80).dimmed());
    println!(
        "{}: {} | {}: {} | {}: {}",
        "Status".dimmed(),
        format_project_status(project.status),
        "Deadline".dimmed(),
        format_date(project.deadline),
        "Progress".dimmed(),
        project
            .progress
            .map(|p| format!("{:.0}%", p))
            .unwrap_or_else(|| "—".to_string())
    );
    if let Some(owner) = &project.owner {
        print_field("Owner", owner.display_name().green());
    }
    if !project.members.is_empty() {
        let names: Vec<&str> = project.members.iter().map(|m| m.display_name()).collect();
        print_field("Members", names.join(", "));
    }
    if let Some(desc) = project.description.as_deref().filter(|d| !d.trim().is_empty()) {
        println!("\n{}", desc);
    }
    if !tasks.is_empty() {
        println!();
        print_tasks(tasks, OutputFormat::Simple, today);
    }
    println!("{}", "═".repeat(80).blue());
}

pub fn print_tasks(tasks: &[Task], format: OutputFormat, today: NaiveDate) {
    if tasks.is_empty() {
        println!("{}", "No tasks found.".dimmed());
        return;
    }

    match format {
        OutputFormat::Json => print_json(tasks),
        OutputFormat::Table => {
            println!("{}", "─".repeat(110).dimmed());
            println!(
                "{:<26} {:<36} {:<12} {:<8} {:<14} {:<12}",
                "ID".bold(),
                "Title".bold(),
                "Status".bold(),
                "Priority".bold(),
                "Assignee".bold(),
                "Due".bold()
            );
            println!("{}", "─".repeat(110).dimmed());
            for task in tasks {
                println!(
                    "{:<26} {:<36} {:<12} {:<8} {:<14} {:<12}",
                    task.id.dimmed(),
                    truncate(&task.title, 36),
                    format_status(task.status),
                    format_priority(task.priority),
                    user_label(task.assignee.as_ref()),
                    format_due(task.due_date, today)
                );
            }
            println!("{}", "─".repeat(110).dimmed());
        }
        OutputFormat::Simple => {
            for status in TaskStatus::ALL {
                let group: Vec<&Task> = tasks.iter().filter(|t| t.status == status).collect();
                if group.is_empty() {
                    continue;
                }

                println!(
                    "\n{} {} ({})",
                    status_icon(status),
                    status.label().with_theme(status_color(status)).bold(),
                    group.len()
                );
                println!("{}", "─".repeat(50).dimmed());

                for task in group {
                    print_task_line(task, today);
                }
            }
        }
    }
}

pub fn print_task_line(task: &Task, today: NaiveDate) {
    let due = if task.due_date.is_some() {
        let label = format_due(task.due_date, today);
        if label.ends_with("overdue") && !task.is_completed() {
            format!(" · {}", label.red())
        } else {
            format!(" · {}", label.dimmed())
        }
    } else {
        String::new()
    };

    let (done, total) = task.subtask_progress();
    let checklist = if total > 0 {
        format!(" [{}/{}]", done, total).dimmed().to_string()
    } else {
        String::new()
    };

    println!(
        "{} {} {} ({}){}{} {}",
        priority_symbol(task.priority).with_theme(priority_color(task.priority)),
        task.title,
        format!("#{}", task.id).dimmed(),
        user_label(task.assignee.as_ref()),
        due,
        checklist,
        format_priority_indicator(task.priority)
    );
}

pub fn print_task_detail(task: &Task, today: NaiveDate) {
    println!("\n{}", "═".repeat(80).blue());
    println!("{} {}", status_icon(task.status), task.title.bold());
    println!("{}", "─".repeat(80).dimmed());
    println!(
        "{}: {} | {}: {} | {}: {} | {}: {}",
        "Status".dimmed(),
        format_status(task.status),
        "Priority".dimmed(),
        format_priority(task.priority),
        "Due".dimmed(),
        format_due(task.due_date, today),
        "Created".dimmed(),
        format_relative_time(task.created_at).dimmed()
    );
    print_field("ID", task.id.dimmed());
    print_field("Assignee", user_label(task.assignee.as_ref()));
    if let Some(creator) = &task.created_by {
        print_field("Created by", creator.display_name());
    }
    if !task.followers.is_empty() {
        let names: Vec<&str> = task.followers.iter().map(|f| f.display_name()).collect();
        print_field("Followers", names.join(", "));
    }
    if let Some(desc) = task.description.as_deref().filter(|d| !d.trim().is_empty()) {
        println!("\n{}", "Description".bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}", desc);
    }
    if !task.subtasks.is_empty() {
        println!("\n{}", "Subtasks".bold());
        print_subtasks(&task.subtasks);
    }
    println!("\n{}", "═".repeat(80).blue());
}

pub fn print_subtasks(subtasks: &[Subtask]) {
    if subtasks.is_empty() {
        println!("{}", "No subtasks.".dimmed());
        return;
    }
    for subtask in subtasks {
        let mark = if subtask.completed { "[x]".green() } else { "[ ]".normal() };
        println!("  {} {} {}", mark, subtask.title, subtask.id.dimmed());
    }
}

pub fn print_files(files: &[TaskFile]) {
    if files.is_empty() {
        println!("{}", "No files attached.".dimmed());
        return;
    }
    for file in files {
        let size = file
            .size
            .map(|s| format!("{:.1} KB", s as f64 / 1024.0))
            .unwrap_or_default();
        println!(
            "  {} {} {} {}",
            file.filename.bold(),
            size.dimmed(),
            format_relative_time(file.uploaded_at).dimmed(),
            file.id.dimmed()
        );
        if let Some(url) = &file.url {
            println!("    {}", url.blue().underline());
        }
    }
}

pub fn print_users(users: &[User], format: OutputFormat) {
    if users.is_empty() {
        println!("{}", "No users found.".dimmed());
        return;
    }

    match format {
        OutputFormat::Json => print_json(users),
        _ => {
            for user in users {
                println!(
                    "  {} <{}> {}",
                    user.name.with_theme(SemanticColor::User),
                    user.email,
                    user.id.dimmed()
                );
            }
        }
    }
}

pub fn print_notifications(notifications: &[Notification], format: OutputFormat) {
    if notifications.is_empty() {
        println!("{}", "No notifications.".dimmed());
        return;
    }

    match format {
        OutputFormat::Json => print_json(notifications),
        _ => {
            for notification in notifications {
                print_notification(notification);
            }
        }
    }
}

pub fn print_notification(notification: &Notification) {
    let marker = if notification.read { " ".normal() } else { "●".blue() };
    println!(
        "{} {} {} {}",
        marker,
        notification.message,
        format_relative_time(notification.created_at).dimmed(),
        notification.id.dimmed()
    );
}
