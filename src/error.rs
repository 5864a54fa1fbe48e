use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("Not logged in. Please run 'taskboard auth login' first.")]
    NotAuthenticated,

    #[error("Session expired or invalid. Please run 'taskboard auth login' again.")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API request failed ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl TaskboardError {
    /// True for errors that mean the stored token can no longer be used.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, TaskboardError::Unauthorized | TaskboardError::NotAuthenticated)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskboardError::NotFound(_))
    }
}

pub type TaskboardResult<T> = Result<T, TaskboardError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> TaskboardResult<T>;
    fn with_context<F>(self, f: F) -> TaskboardResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> TaskboardResult<T> {
        self.map_err(|e| TaskboardError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> TaskboardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TaskboardError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> TaskboardResult<T> {
        self.ok_or_else(|| TaskboardError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> TaskboardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| TaskboardError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! taskboard_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::TaskboardError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::TaskboardError::$error_type(format!($fmt, $($arg)*))
    };
}
