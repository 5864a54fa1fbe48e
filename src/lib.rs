// Module declarations
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod formatting;
pub mod gantt;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod notification_feed;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cli_context::{CliContext, CliContextBuilder};
pub use client::{ProjectScope, TaskboardClient};
pub use config::{load_config, Config, CurrentProject};
pub use error::{ErrorContext, TaskboardError, TaskboardResult};
pub use models::*;
