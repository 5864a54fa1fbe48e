use std::process;

use colored::*;

use taskboard_cli::cli::build_cli;
use taskboard_cli::cli_context::CliContext;
use taskboard_cli::commands;
use taskboard_cli::error::{TaskboardError, TaskboardResult};
use taskboard_cli::formatting::print_failure;
use taskboard_cli::formatting::theme::apply_dark_mode;
use taskboard_cli::interactive::run_interactive_mode;
use taskboard_cli::logging::{init_logging, log_error, log_panic_info};

#[tokio::main]
async fn main() {
    // Logging is best-effort; the CLI works without a log file
    let _ = init_logging();
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));

    let matches = build_cli().get_matches();

    let mut context = match CliContext::load() {
        Ok(context) => context,
        Err(e) => {
            print_failure(&e.to_string());
            process::exit(1);
        }
    };
    apply_dark_mode(context.config().dark_mode);

    let result: TaskboardResult<()> = match matches.subcommand() {
        Some(("auth", sub)) => commands::handle_auth(&mut context, sub).await,
        Some(("dashboard", sub)) => commands::handle_dashboard(&mut context, sub).await,
        Some(("workspaces", sub)) => commands::handle_workspaces(&mut context, sub).await,
        Some(("projects", sub)) => commands::handle_projects(&mut context, sub).await,
        Some(("tasks", sub)) => commands::handle_tasks(&mut context, sub).await,
        Some(("users", sub)) => commands::handle_users(&mut context, sub).await,
        Some(("notifications", sub)) => commands::handle_notifications(&mut context, sub).await,
        Some(("gantt", sub)) => commands::handle_gantt(&mut context, sub).await,
        Some(("tree", sub)) => commands::handle_tree(&mut context, sub).await,
        Some(("prefs", sub)) => commands::handle_prefs(&mut context, sub).await,
        Some(("interactive", _)) => run_interactive_mode(&mut context).await,
        _ => {
            eprintln!("Unknown command. Use 'taskboard --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&format!("Command failed: {}", e));
        context.handle_error(&e);

        print_failure(&e.to_string());
        match e {
            TaskboardError::Unauthorized | TaskboardError::NotAuthenticated => {
                eprintln!("{}", "Run 'taskboard auth login --email <EMAIL>' to sign in.".dimmed());
            }
            TaskboardError::NotFound(_) => {
                eprintln!("{}", "Check the ID, or pass --workspace/--project explicitly.".dimmed());
            }
            _ => {}
        }
        process::exit(1);
    }
}
