use std::env;
use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;

use crate::constants::ENV_LOG;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Threshold from `TASKBOARD_LOG`; unknown values keep the default.
    pub fn from_env_value(value: &str) -> Option<Level> {
        match value.trim().to_lowercase().as_str() {
            "debug" | "trace" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            _ => None,
        }
    }
}

struct LogTarget {
    path: PathBuf,
    min_level: Level,
}

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<LogTarget>> = Mutex::new(None);
}

pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("taskboard-cli")
        .join("logs");

    create_dir_all(&log_dir)?;

    let path = log_dir.join(format!("taskboard-{}.log", Local::now().format("%Y%m%d-%H%M%S")));
    let min_level = env::var(ENV_LOG)
        .ok()
        .and_then(|v| Level::from_env_value(&v))
        .unwrap_or(Level::Info);

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(LogTarget {
            path: path.clone(),
            min_level,
        });
    }

    log_info(&format!("Logging to {} at {} level", path.display(), min_level.as_str()));

    Ok(())
}

pub fn log_error(message: &str) {
    write_line(Level::Error, message);
}

pub fn log_warn(message: &str) {
    write_line(Level::Warn, message);
}

pub fn log_info(message: &str) {
    write_line(Level::Info, message);
}

pub fn log_debug(message: &str) {
    write_line(Level::Debug, message);
}

pub fn log_panic_info(info: &std::panic::PanicInfo) {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown payload".to_string());

    match info.location() {
        Some(location) => log_error(&format!(
            "PANIC at {}:{}:{} - {}",
            location.file(),
            location.line(),
            location.column(),
            payload
        )),
        None => log_error(&format!("PANIC - {}", payload)),
    }

    // Always captured, regardless of RUST_BACKTRACE
    log_error(&format!("Backtrace:\n{}", std::backtrace::Backtrace::force_capture()));
}

fn write_line(level: Level, message: &str) {
    let path = match LOG_FILE.lock() {
        Ok(guard) => match guard.as_ref() {
            Some(target) if level >= target.min_level => target.path.clone(),
            _ => return,
        },
        Err(_) => return,
    };

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {} - {}", timestamp, level.as_str(), message);
    }
}

/// File of the current run, if logging was initialized.
pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE
        .lock()
        .ok()
        .and_then(|guard| guard.as_ref().map(|t| t.path.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_threshold_parsing() {
        assert_eq!(Level::from_env_value("DEBUG"), Some(Level::Debug));
        assert_eq!(Level::from_env_value(" warning "), Some(Level::Warn));
        assert_eq!(Level::from_env_value("loud"), None);
        assert!(Level::Error > Level::Info);
    }
}
