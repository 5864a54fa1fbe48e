use reqwest::Method;
use serde_json::json;
use std::path::Path;

use super::paths::{projects_path, workspace_path, ProjectScope};
use super::rest::RestClient;
use crate::error::{TaskboardError, TaskboardResult};
use crate::models::*;

/// One method per backend operation.
pub struct TaskboardClient {
    rest: RestClient,
}

impl TaskboardClient {
    pub fn new(base_url: &str, token: Option<&str>) -> TaskboardResult<Self> {
        Ok(Self {
            rest: RestClient::new(base_url, token)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.rest.base_url()
    }

    pub fn is_authenticated(&self) -> bool {
        self.rest.is_authenticated()
    }

    // Auth

    pub async fn login(&self, email: &str, password: &str) -> TaskboardResult<AuthResponse> {
        let body = LoginRequest { email, password };
        self.rest
            .post("/auth/login", &body)
            .await
            .map_err(|e| match e {
                TaskboardError::Unauthorized => TaskboardError::InvalidInput("Invalid email or password".to_string()),
                other => other,
            })
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> TaskboardResult<AuthResponse> {
        let body = RegisterRequest { name, email, password };
        self.rest.post("/auth/register", &body).await
    }

    pub async fn current_user(&self) -> TaskboardResult<User> {
        self.require_auth()?;
        self.rest.get("/auth/me").await
    }

    // Users

    pub async fn get_users(&self) -> TaskboardResult<Vec<User>> {
        self.require_auth()?;
        self.rest.get("/users").await
    }

    pub async fn search_users(&self, query: &str) -> TaskboardResult<Vec<User>> {
        self.require_auth()?;
        self.rest.get_with_query("/users/search", &[("q", query)]).await
    }

    pub async fn get_user(&self, user_id: &str) -> TaskboardResult<User> {
        self.require_auth()?;
        self.rest.get(&format!("/users/{}", user_id)).await
    }

    pub async fn update_user(&self, user_id: &str, update: &UserUpdate) -> TaskboardResult<User> {
        self.require_auth()?;
        self.rest.put(&format!("/users/{}", user_id), update).await
    }

    // Workspaces

    pub async fn get_workspaces(&self) -> TaskboardResult<Vec<Workspace>> {
        self.require_auth()?;
        self.rest.get("/workspaces").await
    }

    pub async fn get_workspace(&self, workspace_id: &str) -> TaskboardResult<Workspace> {
        self.require_auth()?;
        self.rest.get(&workspace_path(workspace_id)).await
    }

    pub async fn create_workspace(&self, input: &WorkspaceInput) -> TaskboardResult<Workspace> {
        self.require_auth()?;
        self.rest.post("/workspaces", input).await
    }

    pub async fn update_workspace(&self, workspace_id: &str, input: &WorkspaceInput) -> TaskboardResult<Workspace> {
        self.require_auth()?;
        self.rest.put(&workspace_path(workspace_id), input).await
    }

    pub async fn delete_workspace(&self, workspace_id: &str) -> TaskboardResult<()> {
        self.require_auth()?;
        self.rest.send_unit(Method::DELETE, &workspace_path(workspace_id)).await
    }

    pub async fn get_workspace_members(&self, workspace_id: &str) -> TaskboardResult<Vec<Member>> {
        self.require_auth()?;
        self.rest.get(&format!("{}/members", workspace_path(workspace_id))).await
    }

    pub async fn add_workspace_member(
        &self,
        workspace_id: &str,
        user_id: &str,
        role: MemberRole,
    ) -> TaskboardResult<Workspace> {
        self.require_auth()?;
        let body = MemberInput {
            user_id: user_id.to_string(),
            role,
        };
        self.rest.post(&format!("{}/members", workspace_path(workspace_id)), &body).await
    }

    pub async fn remove_workspace_member(&self, workspace_id: &str, user_id: &str) -> TaskboardResult<()> {
        self.require_auth()?;
        let path = format!("{}/members/{}", workspace_path(workspace_id), user_id);
        self.rest.send_unit(Method::DELETE, &path).await
    }

    // Projects

    pub async fn get_projects(&self, workspace_id: &str) -> TaskboardResult<Vec<Project>> {
        self.require_auth()?;
        self.rest.get(&projects_path(workspace_id)).await
    }

    pub async fn get_project(&self, scope: &ProjectScope) -> TaskboardResult<Project> {
        self.require_auth()?;
        self.rest.get(&scope.project_path()).await
    }

    pub async fn create_project(&self, workspace_id: &str, input: &ProjectInput) -> TaskboardResult<Project> {
        self.require_auth()?;
        self.rest.post(&projects_path(workspace_id), input).await
    }

    pub async fn update_project(&self, scope: &ProjectScope, input: &ProjectInput) -> TaskboardResult<Project> {
        self.require_auth()?;
        self.rest.put(&scope.project_path(), input).await
    }

    pub async fn delete_project(&self, scope: &ProjectScope) -> TaskboardResult<()> {
        self.require_auth()?;
        self.rest.send_unit(Method::DELETE, &scope.project_path()).await
    }

    pub async fn get_project_members(&self, scope: &ProjectScope) -> TaskboardResult<Vec<UserRef>> {
        self.require_auth()?;
        self.rest.get(&format!("{}/members", scope.project_path())).await
    }

    pub async fn add_project_member(&self, scope: &ProjectScope, user_id: &str) -> TaskboardResult<Project> {
        self.require_auth()?;
        let body = json!({ "userId": user_id });
        self.rest.post(&format!("{}/members", scope.project_path()), &body).await
    }

    pub async fn remove_project_member(&self, scope: &ProjectScope, user_id: &str) -> TaskboardResult<()> {
        self.require_auth()?;
        let path = format!("{}/members/{}", scope.project_path(), user_id);
        self.rest.send_unit(Method::DELETE, &path).await
    }

    // Tasks

    pub async fn get_tasks(&self, scope: &ProjectScope, query: &TaskQuery) -> TaskboardResult<Vec<Task>> {
        self.require_auth()?;
        self.rest.get_with_query(&scope.tasks_path(), query).await
    }

    pub async fn get_task(&self, scope: &ProjectScope, task_id: &str) -> TaskboardResult<Task> {
        self.require_auth()?;
        self.rest.get(&scope.task_path(task_id)).await
    }

    pub async fn create_task(&self, scope: &ProjectScope, input: &TaskInput) -> TaskboardResult<Task> {
        self.require_auth()?;
        self.rest.post(&scope.tasks_path(), input).await
    }

    pub async fn update_task(&self, scope: &ProjectScope, task_id: &str, input: &TaskInput) -> TaskboardResult<Task> {
        self.require_auth()?;
        self.rest.put(&scope.task_path(task_id), input).await
    }

    pub async fn update_task_status(
        &self,
        scope: &ProjectScope,
        task_id: &str,
        status: TaskStatus,
    ) -> TaskboardResult<Task> {
        self.require_auth()?;
        let body = json!({ "status": status });
        self.rest.patch(&format!("{}/status", scope.task_path(task_id)), &body).await
    }

    pub async fn delete_task(&self, scope: &ProjectScope, task_id: &str) -> TaskboardResult<()> {
        self.require_auth()?;
        self.rest.send_unit(Method::DELETE, &scope.task_path(task_id)).await
    }

    // Subtasks

    pub async fn get_subtasks(&self, scope: &ProjectScope, task_id: &str) -> TaskboardResult<Vec<Subtask>> {
        self.require_auth()?;
        self.rest.get(&format!("{}/subtasks", scope.task_path(task_id))).await
    }

    pub async fn create_subtask(&self, scope: &ProjectScope, task_id: &str, title: &str) -> TaskboardResult<Subtask> {
        self.require_auth()?;
        let body = SubtaskInput {
            title: Some(title.to_string()),
            completed: None,
        };
        self.rest.post(&format!("{}/subtasks", scope.task_path(task_id)), &body).await
    }

    pub async fn update_subtask(
        &self,
        scope: &ProjectScope,
        task_id: &str,
        subtask_id: &str,
        input: &SubtaskInput,
    ) -> TaskboardResult<Subtask> {
        self.require_auth()?;
        let path = format!("{}/subtasks/{}", scope.task_path(task_id), subtask_id);
        self.rest.put(&path, input).await
    }

    pub async fn delete_subtask(&self, scope: &ProjectScope, task_id: &str, subtask_id: &str) -> TaskboardResult<()> {
        self.require_auth()?;
        let path = format!("{}/subtasks/{}", scope.task_path(task_id), subtask_id);
        self.rest.send_unit(Method::DELETE, &path).await
    }

    // Followers

    pub async fn follow_task(&self, scope: &ProjectScope, task_id: &str) -> TaskboardResult<()> {
        self.require_auth()?;
        self.rest
            .send_unit(Method::POST, &format!("{}/followers", scope.task_path(task_id)))
            .await
    }

    pub async fn unfollow_task(&self, scope: &ProjectScope, task_id: &str) -> TaskboardResult<()> {
        self.require_auth()?;
        self.rest
            .send_unit(Method::DELETE, &format!("{}/followers", scope.task_path(task_id)))
            .await
    }

    // Files

    pub async fn get_task_files(&self, scope: &ProjectScope, task_id: &str) -> TaskboardResult<Vec<TaskFile>> {
        self.require_auth()?;
        self.rest.get(&format!("{}/files", scope.task_path(task_id))).await
    }

    pub async fn upload_task_file(&self, scope: &ProjectScope, task_id: &str, file: &Path) -> TaskboardResult<TaskFile> {
        self.require_auth()?;
        let bytes = tokio::fs::read(file).await?;
        let filename = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("file", part);

        self.rest
            .post_multipart(&format!("{}/files", scope.task_path(task_id)), form)
            .await
    }

    pub async fn delete_task_file(&self, scope: &ProjectScope, task_id: &str, file_id: &str) -> TaskboardResult<()> {
        self.require_auth()?;
        let path = format!("{}/files/{}", scope.task_path(task_id), file_id);
        self.rest.send_unit(Method::DELETE, &path).await
    }

    // Notifications

    pub async fn get_notifications(&self) -> TaskboardResult<Vec<Notification>> {
        self.require_auth()?;
        self.rest.get("/notifications").await
    }

    pub async fn get_unread_count(&self) -> TaskboardResult<u64> {
        self.require_auth()?;
        let count: UnreadCount = self.rest.get("/notifications/unread-count").await?;
        Ok(count.count)
    }

    pub async fn mark_notification_read(&self, notification_id: &str) -> TaskboardResult<()> {
        self.require_auth()?;
        self.rest
            .send_unit(Method::PUT, &format!("/notifications/{}/read", notification_id))
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> TaskboardResult<()> {
        self.require_auth()?;
        self.rest.send_unit(Method::PUT, "/notifications/read-all").await
    }

    fn require_auth(&self) -> TaskboardResult<()> {
        if self.rest.is_authenticated() {
            Ok(())
        } else {
            Err(TaskboardError::NotAuthenticated)
        }
    }
}
