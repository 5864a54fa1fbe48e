use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dates::flexible_date;
use super::{lenient_enum, EntityRef, UserRef};
use crate::constants::{
    HIGH_PRIORITY_FALLBACK_DAYS, LOW_PRIORITY_FALLBACK_DAYS, MEDIUM_PRIORITY_FALLBACK_DAYS,
};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    #[serde(default, alias = "creator", alias = "owner")]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub project: Option<EntityRef>,
    #[serde(default, with = "flexible_date")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_date")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub followers: Vec<UserRef>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assignee.as_ref().map(|a| a.is(user_id)).unwrap_or(false)
    }

    pub fn is_created_by(&self, user_id: &str) -> bool {
        self.created_by.as_ref().map(|c| c.is(user_id)).unwrap_or(false)
    }

    pub fn is_followed_by(&self, user_id: &str) -> bool {
        self.followers.iter().any(|f| f.is(user_id))
    }

    /// (done, total) over the subtask checklist.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|s| s.completed).count();
        (done, self.subtasks.len())
    }
}

/// Deserialized through `FromStr`; statuses this client does not know read
/// as `Todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Review,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Review => "review",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_enum(deserializer)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "todo" | "to-do" | "pending" => Ok(TaskStatus::Todo),
            "in-progress" | "inprogress" | "progress" | "started" => Ok(TaskStatus::InProgress),
            "review" | "in-review" => Ok(TaskStatus::Review),
            "completed" | "done" => Ok(TaskStatus::Completed),
            other => Err(format!(
                "unknown task status '{}' (expected todo, in-progress, review or completed)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    /// Estimated length of a task that has no due date.
    pub fn fallback_days(&self) -> i64 {
        match self {
            TaskPriority::High => HIGH_PRIORITY_FALLBACK_DAYS,
            TaskPriority::Medium => MEDIUM_PRIORITY_FALLBACK_DAYS,
            TaskPriority::Low => LOW_PRIORITY_FALLBACK_DAYS,
        }
    }
}

impl<'de> Deserialize<'de> for TaskPriority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_enum(deserializer)
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        };
        f.write_str(label)
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "1" => Ok(TaskPriority::Low),
            "medium" | "2" => Ok(TaskPriority::Medium),
            "high" | "urgent" | "3" => Ok(TaskPriority::High),
            other => Err(format!("unknown priority '{}' (expected low, medium or high)", other)),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Subtask {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "done", alias = "isCompleted")]
    pub completed: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaskFile {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "name", alias = "originalName")]
    pub filename: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default, alias = "createdAt", with = "flexible_date")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl TaskInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
            && self.due_date.is_none()
    }
}

/// Server-side list filters for `GET …/tasks`.
#[derive(Debug, Serialize, Default, Clone)]
pub struct TaskQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct SubtaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
