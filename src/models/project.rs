use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dates::flexible_date;
use super::{lenient_enum, EntityRef, UserRef};

/// A project inside a workspace. Older endpoints send `title`/`targetDate`,
/// newer ones `name`/`deadline`; both land here.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub workspace: Option<EntityRef>,
    #[serde(default)]
    pub owner: Option<UserRef>,
    #[serde(default)]
    pub members: Vec<UserRef>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, alias = "targetDate", alias = "dueDate", with = "flexible_date")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default, with = "flexible_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_date")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn workspace_id(&self) -> Option<&str> {
        self.workspace.as_ref().map(|w| w.id())
    }

    /// Most recent activity timestamp, used for ordering.
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }
}

// Unknown statuses read as `Planning`
impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_enum(deserializer)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "planning" => Ok(ProjectStatus::Planning),
            "in-progress" | "active" | "progress" => Ok(ProjectStatus::InProgress),
            "on-hold" | "paused" | "hold" => Ok(ProjectStatus::OnHold),
            "completed" | "done" => Ok(ProjectStatus::Completed),
            other => Err(format!(
                "unknown project status '{}' (expected planning, in-progress, on-hold or completed)",
                other
            )),
        }
    }
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}
