use colored::*;
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::dates::local_date;
use crate::models::{ProjectStatus, TaskPriority, TaskStatus};

pub fn extract_first_name(name: &str) -> &str {
    name.split_whitespace()
        .next()
        .unwrap_or(name)
}

pub fn format_priority(priority: TaskPriority) -> ColoredString {
    match priority {
        TaskPriority::High => "High".red().bold(),
        TaskPriority::Medium => "Medium".yellow(),
        TaskPriority::Low => "Low".normal(),
    }
}

pub fn format_priority_indicator(priority: TaskPriority) -> ColoredString {
    match priority {
        TaskPriority::High => "!".red().bold(),
        TaskPriority::Medium => "!".yellow(),
        TaskPriority::Low => " ".normal(),
    }
}

pub fn format_status(status: TaskStatus) -> ColoredString {
    match status {
        TaskStatus::Todo => status.label().normal(),
        TaskStatus::InProgress => status.label().yellow(),
        TaskStatus::Review => status.label().magenta(),
        TaskStatus::Completed => status.label().green(),
    }
}

pub fn format_project_status(status: ProjectStatus) -> ColoredString {
    match status {
        ProjectStatus::Planning => status.label().yellow(),
        ProjectStatus::InProgress => status.label().green(),
        ProjectStatus::OnHold => status.label().red().dimmed(),
        ProjectStatus::Completed => status.label().blue(),
    }
}

pub fn status_icon(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "○",
        TaskStatus::InProgress => "◐",
        TaskStatus::Review => "◑",
        TaskStatus::Completed => "✓",
    }
}

pub fn format_relative_time(timestamp: Option<DateTime<Utc>>) -> String {
    format_relative_time_at(timestamp, Utc::now())
}

pub fn format_relative_time_at(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let parsed = match timestamp {
        Some(ts) => ts,
        None => return "unknown".to_string(),
    };

    let duration = now.signed_duration_since(parsed);

    if duration.num_days() > 365 {
        format!("{}y ago", duration.num_days() / 365)
    } else if duration.num_days() > 30 {
        format!("{}mo ago", duration.num_days() / 30)
    } else if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Due date relative to `today`: "today", "in 3d", "2d overdue".
pub fn format_due(due: Option<DateTime<Utc>>, today: NaiveDate) -> String {
    let due = match due {
        Some(due) => local_date(due),
        None => return "no due date".to_string(),
    };

    let days = (due - today).num_days();
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        d if d > 1 => format!("in {}d", d),
        d => format!("{}d overdue", -d),
    }
}

pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "—".to_string())
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Pads or truncates to exactly `width` characters.
pub fn fit(s: &str, width: usize) -> String {
    let truncated = truncate(s, width);
    format!("{:<width$}", truncated, width = width)
}

pub fn clean_description(desc: &str) -> String {
    // First non-empty line only
    let first_line = desc
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    let cleaned: String = first_line
        .trim()
        .chars()
        .filter(|c| !matches!(c, '*' | '_' | '`' | '#' | '>' | '[' | ']'))
        .collect();

    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.ends_with('.') || trimmed.ends_with('!') || trimmed.ends_with('?') {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}
