use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::client::{ProjectScope, TaskboardClient};
use crate::config::{config_path, load_config, load_config_from, save_config_to, Config, CurrentProject};
use crate::constants::ENV_TOKEN;
use crate::error::{TaskboardError, TaskboardResult};
use crate::logging::{log_info, log_warn};
use crate::models::{AuthResponse, User};

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    config: Config,
    config_path: Option<PathBuf>,
    token_override: Option<String>,
    // User behind `token_override`, kept for this run only
    override_user: Option<User>,
    client: Option<Arc<TaskboardClient>>,
}

impl CliContext {
    /// Create an empty context that never touches the disk
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            config_path: None,
            token_override: None,
            override_user: None,
            client: None,
        }
    }

    /// Load context from saved configuration
    pub fn load() -> TaskboardResult<Self> {
        let path = config_path()?;
        let token_override = env::var(ENV_TOKEN).ok().filter(|t| !t.trim().is_empty());
        Ok(Self {
            config: load_config_from(&path),
            config_path: Some(path),
            token_override,
            override_user: None,
            client: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Persist the configuration (no-op for in-memory contexts)
    pub fn save(&self) -> TaskboardResult<()> {
        match &self.config_path {
            Some(path) => save_config_to(&self.config, path),
            None => Ok(()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token_override
            .as_deref()
            .or(self.config.token.as_deref())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn api_url(&self) -> String {
        self.config.api_url()
    }

    /// Get or create a client carrying the stored token
    pub fn verified_client(&mut self) -> TaskboardResult<Arc<TaskboardClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let token = self.token().ok_or(TaskboardError::NotAuthenticated)?.to_string();
        let client = Arc::new(TaskboardClient::new(&self.api_url(), Some(&token))?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Client without credentials, for login and registration
    pub fn anonymous_client(&self) -> TaskboardResult<TaskboardClient> {
        TaskboardClient::new(&self.api_url(), None)
    }

    /// Store a fresh session and drop the cached client
    pub fn set_session(&mut self, auth: AuthResponse) -> TaskboardResult<()> {
        log_info(&format!("Logged in as {}", auth.user.email));
        self.config.token = Some(auth.token);
        self.config.user = Some(auth.user);
        self.client = None;
        self.save()
    }

    pub fn clear_session(&mut self) -> TaskboardResult<()> {
        self.config.clear_session();
        self.client = None;
        self.save()
    }

    /// True when the token in use comes from `TASKBOARD_TOKEN` rather than
    /// the saved session.
    pub fn uses_token_override(&self) -> bool {
        self.token_override.is_some()
    }

    /// The logged-in user, from the saved session or the backend. The saved
    /// user belongs to the saved token, so an env token always asks.
    pub async fn current_user(&mut self) -> TaskboardResult<User> {
        if self.uses_token_override() {
            if let Some(user) = &self.override_user {
                return Ok(user.clone());
            }
            let client = self.verified_client()?;
            let user = client.current_user().await?;
            self.override_user = Some(user.clone());
            return Ok(user);
        }

        if let Some(user) = &self.config.user {
            return Ok(user.clone());
        }

        let client = self.verified_client()?;
        let user = client.current_user().await?;
        self.config.user = Some(user.clone());
        self.save()?;
        Ok(user)
    }

    pub fn set_current_project(&mut self, current: Option<CurrentProject>) -> TaskboardResult<()> {
        self.config.current_project = current;
        self.save()
    }

    /// Explicit workspace/project ids win; otherwise the current project.
    pub fn resolve_scope(&self, workspace: Option<&str>, project: Option<&str>) -> TaskboardResult<ProjectScope> {
        let current = self.config.current_project.as_ref();

        let workspace_id = workspace
            .map(str::to_string)
            .or_else(|| current.map(|c| c.workspace_id.clone()));
        let project_id = project
            .map(str::to_string)
            .or_else(|| current.map(|c| c.project_id.clone()));

        match (workspace_id, project_id) {
            (Some(workspace_id), Some(project_id)) => Ok(ProjectScope::new(workspace_id, project_id)),
            _ => Err(TaskboardError::InvalidInput(
                "No project selected. Pass --workspace and --project or run 'taskboard projects use'".to_string(),
            )),
        }
    }

    pub fn resolve_workspace(&self, workspace: Option<&str>) -> TaskboardResult<String> {
        workspace
            .map(str::to_string)
            .or_else(|| self.config.current_project.as_ref().map(|c| c.workspace_id.clone()))
            .ok_or_else(|| TaskboardError::InvalidInput(
                "No workspace selected. Pass --workspace or run 'taskboard projects use'".to_string(),
            ))
    }

    /// A rejected stored token is useless; forget it so the next run asks
    /// for a login. A rejected env token leaves the saved session alone.
    pub fn handle_error(&mut self, error: &TaskboardError) {
        if !matches!(error, TaskboardError::Unauthorized) {
            return;
        }
        if self.uses_token_override() {
            log_warn(&format!("Backend rejected the token from {}", ENV_TOKEN));
            self.override_user = None;
            self.client = None;
            return;
        }
        if self.config.token.is_some() {
            log_warn("Backend rejected the stored token, clearing session");
            if let Err(e) = self.clear_session() {
                log_warn(&format!("Failed to clear session: {}", e));
            }
        }
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    token: Option<String>,
    token_override: Option<String>,
    api_url: Option<String>,
    config_path: Option<PathBuf>,
    current_project: Option<CurrentProject>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            token: None,
            token_override: None,
            api_url: None,
            config_path: None,
            current_project: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Token as if given through `TASKBOARD_TOKEN`; the saved one stays put.
    pub fn with_token_override(mut self, token: impl Into<String>) -> Self {
        self.token_override = Some(token.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_current_project(mut self, current: CurrentProject) -> Self {
        self.current_project = Some(current);
        self
    }

    pub fn build(self) -> TaskboardResult<CliContext> {
        let mut config = match &self.config_path {
            Some(path) => load_config_from(path),
            None if self.token.is_some() || self.token_override.is_some() => Config::default(),
            None => load_config(),
        };

        if let Some(token) = self.token {
            config.token = Some(token);
        }
        if let Some(api_url) = self.api_url {
            config.api_url = Some(api_url);
        }
        if self.current_project.is_some() {
            config.current_project = self.current_project;
        }

        Ok(CliContext {
            config,
            config_path: self.config_path,
            token_override: self.token_override,
            override_user: None,
            client: None,
        })
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
