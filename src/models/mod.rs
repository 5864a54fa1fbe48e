pub mod dates;
pub mod notification;
pub mod project;
pub mod response;
pub mod task;
pub mod user;
pub mod workspace;

// Re-export commonly used types
pub use notification::{Notification, UnreadCount};
pub use project::{Project, ProjectInput, ProjectStatus};
pub use response::{ErrorBody, Payload};
pub use task::{Subtask, SubtaskInput, Task, TaskFile, TaskInput, TaskPriority, TaskQuery, TaskStatus};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User, UserRef, UserUpdate};
pub use workspace::{Member, MemberInput, MemberRole, Workspace, WorkspaceInput};

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Reference to another document, either its id or the populated document.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum EntityRef {
    Id(String),
    Doc {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default, alias = "title")]
        name: Option<String>,
    },
}

impl EntityRef {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Doc { id, .. } => id,
        }
    }
}

/// Reads a string enum through its `FromStr`. Values the backend added
/// after this client was written, and `null`, fall back to the default so
/// one odd record cannot fail a whole list.
pub(crate) fn lenient_enum<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_accepts_legacy_title_and_target_date() {
        let project: Project = serde_json::from_value(json!({
            "_id": "p1",
            "title": "Website",
            "targetDate": "2026-11-01",
            "status": "active"
        }))
        .unwrap();

        assert_eq!(project.id, "p1");
        assert_eq!(project.name, "Website");
        assert!(project.deadline.is_some());
        assert_eq!(project.status, ProjectStatus::InProgress);
    }

    #[test]
    fn task_accepts_populated_and_bare_user_refs() {
        let task: Task = serde_json::from_value(json!({
            "id": "t1",
            "title": "Write docs",
            "status": "in_progress",
            "priority": "high",
            "assignee": { "_id": "u1", "name": "Ada", "email": "ada@example.com" },
            "createdBy": "u2",
            "project": { "_id": "p1", "name": "Website" },
            "dueDate": null
        }))
        .unwrap();

        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::High);
        assert!(task.is_assigned_to("u1"));
        assert!(task.is_created_by("u2"));
        assert_eq!(task.project.as_ref().map(|p| p.id()), Some("p1"));
        assert!(task.due_date.is_none());
    }

    #[test]
    fn payload_unwraps_data_envelope() {
        let wrapped: Payload<Vec<Workspace>> = serde_json::from_value(json!({
            "data": [{ "id": "w1", "name": "Acme" }]
        }))
        .unwrap();
        assert_eq!(wrapped.into_inner().len(), 1);

        let bare: Payload<Vec<Workspace>> = serde_json::from_value(json!([
            { "id": "w1", "name": "Acme" },
            { "id": "w2", "name": "Initech" }
        ]))
        .unwrap();
        assert_eq!(bare.into_inner().len(), 2);
    }

    #[test]
    fn notification_reads_is_read_alias() {
        let n: Notification = serde_json::from_value(json!({
            "_id": "n1",
            "message": "You were assigned",
            "type": "assignment",
            "isRead": true
        }))
        .unwrap();
        assert!(n.read);
        assert_eq!(n.kind.as_deref(), Some("assignment"));
    }

    #[test]
    fn unknown_member_role_reads_as_member() {
        let workspace: Workspace = serde_json::from_value(json!({
            "_id": "w1",
            "name": "Acme",
            "members": [
                { "user": "u1", "role": "editor" },
                { "user": "u2", "role": "ADMIN" },
                { "user": "u3" }
            ]
        }))
        .unwrap();

        let roles: Vec<MemberRole> = workspace.members.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![MemberRole::Member, MemberRole::Admin, MemberRole::Member]);
    }

    #[test]
    fn unknown_statuses_fall_back_to_defaults() {
        let project: Project = serde_json::from_value(json!({
            "_id": "p1", "name": "X", "status": "archived"
        }))
        .unwrap();
        assert_eq!(project.status, ProjectStatus::Planning);

        let tasks: Vec<Task> = serde_json::from_value(json!([
            { "_id": "t1", "title": "Blocked", "status": "blocked", "priority": "critical" },
            { "_id": "t2", "title": "Done", "status": "done", "priority": "urgent" },
            { "_id": "t3", "title": "Null", "status": null }
        ]))
        .unwrap();
        assert_eq!(tasks[0].status, TaskStatus::Todo);
        assert_eq!(tasks[0].priority, TaskPriority::Medium);
        assert_eq!(tasks[1].status, TaskStatus::Completed);
        assert_eq!(tasks[1].priority, TaskPriority::High);
        assert_eq!(tasks[2].status, TaskStatus::Todo);
    }

    #[test]
    fn statuses_serialize_in_kebab_case() {
        assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), json!("in-progress"));
        assert_eq!(serde_json::to_value(ProjectStatus::OnHold).unwrap(), json!("on-hold"));
    }
}
