use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_API_URL, ENV_API_URL, ENV_CONFIG};
use crate::error::{TaskboardError, TaskboardResult};
use crate::models::User;

/// Client state persisted between runs.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub sidebar_collapsed: bool,
    #[serde(default)]
    pub current_project: Option<CurrentProject>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentProject {
    pub workspace_id: String,
    pub project_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Config {
    /// Forget everything tied to the logged-in user.
    pub fn clear_session(&mut self) {
        self.token = None;
        self.user = None;
        self.current_project = None;
    }

    pub fn api_url(&self) -> String {
        env::var(ENV_API_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

pub fn config_path() -> TaskboardResult<PathBuf> {
    if let Ok(path) = env::var(ENV_CONFIG) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let home_dir = dirs::home_dir()
        .ok_or_else(|| TaskboardError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

/// Reads the config file; a missing or unreadable file yields defaults.
pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(_) => Config::default(),
    }
}

pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_config_to(config: &Config, path: &Path) -> TaskboardResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;

    Ok(())
}
