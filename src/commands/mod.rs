pub mod auth;
pub mod dashboard;
pub mod gantt;
pub mod notifications;
pub mod prefs;
pub mod projects;
pub mod tasks;
pub mod tree;
pub mod users;
pub mod workspaces;

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::client::ProjectScope;
use crate::error::{TaskboardError, TaskboardResult};
use crate::formatting::OutputFormat;

pub use auth::handle_auth;
pub use dashboard::handle_dashboard;
pub use gantt::handle_gantt;
pub use notifications::handle_notifications;
pub use prefs::handle_prefs;
pub use projects::handle_projects;
pub use tasks::handle_tasks;
pub use tree::handle_tree;
pub use users::handle_users;
pub use workspaces::handle_workspaces;

/// Calendar day used for deadlines and Gantt placement.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn required<'a>(matches: &'a ArgMatches, name: &str) -> TaskboardResult<&'a str> {
    optional(matches, name)
        .ok_or_else(|| TaskboardError::InvalidInput(format!("Missing required argument '{}'", name)))
}

pub(crate) fn optional<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a str> {
    // Not every subcommand defines every shared arg
    matches
        .try_get_one::<String>(name)
        .ok()
        .flatten()
        .map(String::as_str)
}

pub(crate) fn output_format(matches: &ArgMatches) -> TaskboardResult<OutputFormat> {
    Ok(parse_opt(matches, "format")?.unwrap_or(OutputFormat::Simple))
}

/// Parses an optional enum-valued flag through its `FromStr` impl.
pub(crate) fn parse_opt<T>(matches: &ArgMatches, name: &str) -> TaskboardResult<Option<T>>
where
    T: FromStr<Err = String>,
{
    optional(matches, name)
        .map(|raw| T::from_str(raw).map_err(TaskboardError::InvalidInput))
        .transpose()
}

pub(crate) fn scope_from(context: &CliContext, matches: &ArgMatches) -> TaskboardResult<ProjectScope> {
    context.resolve_scope(optional(matches, "workspace"), optional(matches, "project"))
}

pub(crate) fn unknown(command: &str) -> TaskboardError {
    TaskboardError::InvalidInput(format!(
        "Unknown {} subcommand. Use 'taskboard {} --help' for available options.",
        command, command
    ))
}
