use clap::ArgMatches;
use colored::*;

use super::{optional, unknown};
use crate::cli_context::CliContext;
use crate::error::TaskboardResult;
use crate::formatting::print_success;
use crate::formatting::tables::print_field;
use crate::formatting::theme::apply_dark_mode;
use crate::logging::get_log_file_path;

/// Resolves an on/off/toggle style argument against the current value.
pub fn resolve_switch(value: Option<&str>, on: &str, current: bool) -> bool {
    match value {
        Some("toggle") | None => !current,
        Some(v) => v == on,
    }
}

pub async fn handle_prefs(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    match matches.subcommand() {
        Some(("show", _)) => {
            let config = context.config();
            let on_off = |flag: bool| if flag { "on".green() } else { "off".dimmed() };
            print_field("Dark mode", on_off(config.dark_mode));
            print_field("Sidebar collapsed", on_off(config.sidebar_collapsed));
            print_field("API", config.api_url());
            match &config.current_project {
                Some(current) => print_field(
                    "Current project",
                    format!(
                        "{} ({}/{})",
                        current.name.as_deref().unwrap_or("unnamed"),
                        current.workspace_id,
                        current.project_id
                    ),
                ),
                None => print_field("Current project", "none".dimmed()),
            }
            if let Some(path) = get_log_file_path() {
                print_field("Log file", path.display());
            }
        }
        Some(("dark-mode", sub)) => {
            let dark = resolve_switch(optional(sub, "value"), "on", context.config().dark_mode);
            context.config_mut().dark_mode = dark;
            context.save()?;
            apply_dark_mode(dark);
            print_success(if dark { "Dark mode on" } else { "Dark mode off" });
        }
        Some(("sidebar", sub)) => {
            let collapsed = resolve_switch(optional(sub, "value"), "collapsed", context.config().sidebar_collapsed);
            context.config_mut().sidebar_collapsed = collapsed;
            context.save()?;
            print_success(if collapsed { "Sidebar collapsed" } else { "Sidebar expanded" });
        }
        _ => return Err(unknown("prefs")),
    }

    Ok(())
}
