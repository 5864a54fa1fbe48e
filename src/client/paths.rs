/// Identifies a project by its workspace, which every project- and
/// task-level endpoint is nested under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectScope {
    pub workspace_id: String,
    pub project_id: String,
}

impl ProjectScope {
    pub fn new(workspace_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            project_id: project_id.into(),
        }
    }

    pub fn project_path(&self) -> String {
        project_path(&self.workspace_id, &self.project_id)
    }

    pub fn tasks_path(&self) -> String {
        format!("{}/tasks", self.project_path())
    }

    pub fn task_path(&self, task_id: &str) -> String {
        format!("{}/{}", self.tasks_path(), task_id)
    }
}

pub fn workspace_path(workspace_id: &str) -> String {
    format!("/workspaces/{}", workspace_id)
}

pub fn projects_path(workspace_id: &str) -> String {
    format!("{}/projects", workspace_path(workspace_id))
}

pub fn project_path(workspace_id: &str, project_id: &str) -> String {
    format!("{}/{}", projects_path(workspace_id), project_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nests_task_paths_under_workspace_and_project() {
        let scope = ProjectScope::new("w1", "p1");
        assert_eq!(scope.project_path(), "/workspaces/w1/projects/p1");
        assert_eq!(scope.tasks_path(), "/workspaces/w1/projects/p1/tasks");
        assert_eq!(scope.task_path("t9"), "/workspaces/w1/projects/p1/tasks/t9");
    }
}
