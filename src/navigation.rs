//! Workspace → project → task navigation tree.
//!
//! Children are fetched the first time a node is expanded and kept for the
//! rest of the session; `None` means "not fetched yet", an empty vector
//! means "fetched, nothing there".

use crate::client::{ProjectScope, TaskboardClient};
use crate::error::TaskboardResult;
use crate::logging::log_debug;
use crate::models::{Project, Task, TaskQuery, Workspace};

#[derive(Debug, Clone)]
pub struct ProjectNode {
    pub project: Project,
    pub expanded: bool,
    pub tasks: Option<Vec<Task>>,
}

#[derive(Debug, Clone)]
pub struct WorkspaceNode {
    pub workspace: Workspace,
    pub expanded: bool,
    pub projects: Option<Vec<ProjectNode>>,
}

/// What the caller has to fetch after an expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    Projects { workspace_id: String },
    Tasks(ProjectScope),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef {
    Workspace { workspace_id: String },
    Project(ProjectScope),
    Task { scope: ProjectScope, task_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub label: String,
    pub expanded: bool,
    pub loaded: bool,
    pub node: NodeRef,
}

#[derive(Debug, Clone, Default)]
pub struct NavTree {
    pub workspaces: Vec<WorkspaceNode>,
    pub collapsed: bool,
}

impl NavTree {
    pub fn new(collapsed: bool) -> Self {
        Self {
            workspaces: Vec::new(),
            collapsed,
        }
    }

    /// Replaces the roots, keeping already-fetched children of workspaces
    /// that are still present.
    pub fn set_workspaces(&mut self, workspaces: Vec<Workspace>) {
        let mut previous = std::mem::take(&mut self.workspaces);
        self.workspaces = workspaces
            .into_iter()
            .map(|workspace| {
                match previous.iter().position(|n| n.workspace.id == workspace.id) {
                    Some(index) => {
                        let mut node = previous.swap_remove(index);
                        node.workspace = workspace;
                        node
                    }
                    None => WorkspaceNode {
                        workspace,
                        expanded: false,
                        projects: None,
                    },
                }
            })
            .collect();
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    pub fn toggle_workspace(&mut self, workspace_id: &str) -> Option<LoadRequest> {
        let node = self.workspace_mut(workspace_id)?;
        node.expanded = !node.expanded;
        if node.expanded && node.projects.is_none() {
            Some(LoadRequest::Projects {
                workspace_id: workspace_id.to_string(),
            })
        } else {
            None
        }
    }

    pub fn toggle_project(&mut self, scope: &ProjectScope) -> Option<LoadRequest> {
        let node = self.project_mut(scope)?;
        node.expanded = !node.expanded;
        if node.expanded && node.tasks.is_none() {
            Some(LoadRequest::Tasks(scope.clone()))
        } else {
            None
        }
    }

    pub fn set_projects(&mut self, workspace_id: &str, projects: Vec<Project>) {
        if let Some(node) = self.workspace_mut(workspace_id) {
            node.projects = Some(
                projects
                    .into_iter()
                    .map(|project| ProjectNode {
                        project,
                        expanded: false,
                        tasks: None,
                    })
                    .collect(),
            );
        }
    }

    pub fn set_tasks(&mut self, scope: &ProjectScope, tasks: Vec<Task>) {
        if let Some(node) = self.project_mut(scope) {
            node.tasks = Some(tasks);
        }
    }

    /// Drops cached children so the next expansion refetches them.
    pub fn invalidate(&mut self) {
        for ws in &mut self.workspaces {
            ws.projects = None;
            ws.expanded = false;
        }
    }

    pub fn projects_loaded(&self, workspace_id: &str) -> bool {
        self.workspaces
            .iter()
            .find(|n| n.workspace.id == workspace_id)
            .map(|n| n.projects.is_some())
            .unwrap_or(false)
    }

    pub fn tasks_of(&self, scope: &ProjectScope) -> Option<&[Task]> {
        self.project(scope).and_then(|n| n.tasks.as_deref())
    }

    pub fn project(&self, scope: &ProjectScope) -> Option<&ProjectNode> {
        self.workspaces
            .iter()
            .find(|n| n.workspace.id == scope.workspace_id)?
            .projects
            .as_ref()?
            .iter()
            .find(|p| p.project.id == scope.project_id)
    }

    /// Expanded tree flattened into display rows.
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();

        for ws in &self.workspaces {
            let workspace_id = ws.workspace.id.clone();
            rows.push(TreeRow {
                depth: 0,
                label: ws.workspace.name.clone(),
                expanded: ws.expanded,
                loaded: ws.projects.is_some(),
                node: NodeRef::Workspace {
                    workspace_id: workspace_id.clone(),
                },
            });

            if !ws.expanded {
                continue;
            }

            for project in ws.projects.iter().flatten() {
                let scope = ProjectScope::new(workspace_id.clone(), project.project.id.clone());
                rows.push(TreeRow {
                    depth: 1,
                    label: project.project.name.clone(),
                    expanded: project.expanded,
                    loaded: project.tasks.is_some(),
                    node: NodeRef::Project(scope.clone()),
                });

                if !project.expanded {
                    continue;
                }

                for task in project.tasks.iter().flatten() {
                    rows.push(TreeRow {
                        depth: 2,
                        label: task.title.clone(),
                        expanded: false,
                        loaded: true,
                        node: NodeRef::Task {
                            scope: scope.clone(),
                            task_id: task.id.clone(),
                        },
                    });
                }
            }
        }

        rows
    }

    /// Toggles a workspace and fetches its projects if this is the first
    /// expansion.
    pub async fn expand_workspace(&mut self, client: &TaskboardClient, workspace_id: &str) -> TaskboardResult<()> {
        if let Some(LoadRequest::Projects { workspace_id }) = self.toggle_workspace(workspace_id) {
            log_debug(&format!("Loading projects for workspace {}", workspace_id));
            match client.get_projects(&workspace_id).await {
                Ok(projects) => self.set_projects(&workspace_id, projects),
                Err(e) => {
                    if let Some(node) = self.workspace_mut(&workspace_id) {
                        node.expanded = false;
                    }
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    pub async fn expand_project(&mut self, client: &TaskboardClient, scope: &ProjectScope) -> TaskboardResult<()> {
        if let Some(LoadRequest::Tasks(scope)) = self.toggle_project(scope) {
            log_debug(&format!("Loading tasks for project {}", scope.project_id));
            match client.get_tasks(&scope, &TaskQuery::default()).await {
                Ok(tasks) => self.set_tasks(&scope, tasks),
                Err(e) => {
                    if let Some(node) = self.project_mut(&scope) {
                        node.expanded = false;
                    }
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    fn workspace_mut(&mut self, workspace_id: &str) -> Option<&mut WorkspaceNode> {
        self.workspaces.iter_mut().find(|n| n.workspace.id == workspace_id)
    }

    fn project_mut(&mut self, scope: &ProjectScope) -> Option<&mut ProjectNode> {
        self.workspace_mut(&scope.workspace_id)?
            .projects
            .as_mut()?
            .iter_mut()
            .find(|p| p.project.id == scope.project_id)
    }
}
