pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const CONFIG_FILE: &str = ".taskboard-cli-config.json";

pub const ENV_API_URL: &str = "TASKBOARD_API_URL";
pub const ENV_TOKEN: &str = "TASKBOARD_TOKEN";
pub const ENV_CONFIG: &str = "TASKBOARD_CONFIG";
pub const ENV_LOG: &str = "TASKBOARD_LOG";

// Dashboard list caps
pub const RECENT_TASKS_LIMIT: usize = 5;
pub const IN_PROGRESS_PROJECTS_LIMIT: usize = 3;
pub const UPCOMING_DEADLINES_LIMIT: usize = 5;
pub const UPCOMING_WINDOW_DAYS: i64 = 14;

// Gantt layout
pub const DAY_WIDTH: usize = 3;
pub const HIGH_PRIORITY_FALLBACK_DAYS: i64 = 3;
pub const MEDIUM_PRIORITY_FALLBACK_DAYS: i64 = 7;
pub const LOW_PRIORITY_FALLBACK_DAYS: i64 = 14;

pub const NOTIFICATION_POLL_SECS: u64 = 30;
pub const TOAST_TTL_SECS: u64 = 5;
