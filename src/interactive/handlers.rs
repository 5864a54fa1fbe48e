use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use std::time::{Duration, Instant};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::{Action, InteractiveApp};
use super::event::{Event, EventHandler};
use crate::cli_context::CliContext;
use crate::client::{ProjectScope, TaskboardClient};
use crate::config::CurrentProject;
use crate::error::{TaskboardError, TaskboardResult};
use crate::formatting::theme::apply_dark_mode;
use crate::logging::{log_debug, log_error, log_info};
use crate::models::TaskQuery;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

const TICK_MS: u64 = 250;
const SESSION_EXPIRED_PAUSE_MS: u64 = 1500;

// Set while raw mode and the alternate screen are on
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);
static PANIC_RESTORE: Once = Once::new();

/// Chains a hook in front of the current one that hands the terminal back
/// before the panic message is printed.
fn install_panic_restore() {
    PANIC_RESTORE.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if take_terminal_active() {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
            }
            previous(info);
        }));
    });
}

fn take_terminal_active() -> bool {
    TERMINAL_ACTIVE.swap(false, Ordering::SeqCst)
}

pub async fn run_interactive_mode(context: &mut CliContext) -> TaskboardResult<()> {
    log_info("Starting interactive mode");

    // Fail before touching the terminal when there is no session
    let client = context.verified_client()?;
    let user = context.current_user().await?;

    let mut terminal = setup_terminal()?;
    log_debug("Terminal initialized");

    let config = context.config();
    let mut app = InteractiveApp::new(config.dark_mode, config.sidebar_collapsed);
    app.user = Some(user);

    let result = run_app(&mut terminal, &mut app, &client, context).await;

    restore_terminal(&mut terminal)?;
    log_info("Exiting interactive mode");

    if let Err(e) = &result {
        log_error(&format!("Interactive mode ended with error: {}", e));
    }
    result
}

fn setup_terminal() -> TaskboardResult<Term> {
    install_panic_restore();
    TERMINAL_ACTIVE.store(true, Ordering::SeqCst);
    enable_raw_mode().map_err(|e| TaskboardError::TerminalError(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| TaskboardError::TerminalError(e.to_string()))?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| TaskboardError::TerminalError(e.to_string()))
}

fn restore_terminal(terminal: &mut Term) -> TaskboardResult<()> {
    TERMINAL_ACTIVE.store(false, Ordering::SeqCst);
    disable_raw_mode().map_err(|e| TaskboardError::TerminalError(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| TaskboardError::TerminalError(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| TaskboardError::TerminalError(e.to_string()))
}

async fn run_app(
    terminal: &mut Term,
    app: &mut InteractiveApp,
    client: &TaskboardClient,
    context: &mut CliContext,
) -> TaskboardResult<()> {
    app.loading = true;
    draw(terminal, app)?;
    let initial = load_initial(app, client, context).await;
    app.loading = false;
    settle(terminal, app, initial).await?;

    let events = EventHandler::new(TICK_MS);

    loop {
        draw(terminal, app)?;

        let event = events
            .recv()
            .map_err(|e| TaskboardError::TerminalError(e.to_string()))?;

        match event {
            Event::Key(key) => {
                log_debug(&format!("Key pressed: {:?}, Mode: {:?}", key.code, app.mode));
                if let Some(action) = app.handle_key(key.code) {
                    app.loading = true;
                    draw(terminal, app)?;
                    let outcome = perform(app, client, context, action).await;
                    app.loading = false;
                    settle(terminal, app, outcome).await?;
                }
            }
            Event::Tick => {
                let now = Instant::now();
                app.toasts.expire(now);
                if app.poll_due(now) {
                    let outcome = poll_notifications(app, client).await;
                    settle(terminal, app, outcome).await?;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(terminal: &mut Term, app: &InteractiveApp) -> TaskboardResult<()> {
    terminal
        .draw(|f| super::ui::draw(f, app))
        .map(|_| ())
        .map_err(|e| TaskboardError::TerminalError(e.to_string()))
}

/// Turns a failed action into an error toast. Only a rejected session ends
/// the loop, after the toast has been on screen for a moment.
async fn settle(terminal: &mut Term, app: &mut InteractiveApp, outcome: TaskboardResult<()>) -> TaskboardResult<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(TaskboardError::Unauthorized) => {
            app.toasts.error("Session expired. Please log in again.");
            draw(terminal, app)?;
            tokio::time::sleep(Duration::from_millis(SESSION_EXPIRED_PAUSE_MS)).await;
            Err(TaskboardError::Unauthorized)
        }
        Err(e) => {
            log_error(&format!("Interactive action failed: {}", e));
            app.toasts.error(e.to_string());
            Ok(())
        }
    }
}

async fn load_initial(app: &mut InteractiveApp, client: &TaskboardClient, context: &CliContext) -> TaskboardResult<()> {
    app.nav.set_workspaces(client.get_workspaces().await?);

    if let Some(current) = context.config().current_project.clone() {
        let scope = ProjectScope::new(current.workspace_id, current.project_id);
        app.nav.expand_workspace(client, &scope.workspace_id).await?;
        let tasks = client.get_tasks(&scope, &TaskQuery::default()).await?;
        app.set_tasks(scope, current.name, tasks);
    }

    poll_notifications(app, client).await
}

async fn poll_notifications(app: &mut InteractiveApp, client: &TaskboardClient) -> TaskboardResult<()> {
    app.last_poll = Some(Instant::now());
    let notifications = client.get_notifications().await?;
    for fresh in app.feed.ingest_arrivals(&notifications) {
        app.toasts.info(fresh.message);
    }
    Ok(())
}

async fn perform(
    app: &mut InteractiveApp,
    client: &TaskboardClient,
    context: &mut CliContext,
    action: Action,
) -> TaskboardResult<()> {
    log_debug(&format!("Performing {:?}", action));

    match action {
        Action::Refresh => {
            app.nav.set_workspaces(client.get_workspaces().await?);
            if let Some(scope) = app.current.clone() {
                let tasks = client.get_tasks(&scope, &TaskQuery::default()).await?;
                app.nav.set_tasks(&scope, tasks.clone());
                let name = app.current_name.clone();
                app.set_tasks(scope, name, tasks);
            }
            poll_notifications(app, client).await?;
            app.toasts.success("Refreshed");
        }
        Action::MarkAllRead => {
            client.mark_all_notifications_read().await?;
            app.feed.mark_all_read();
            app.toasts.success("All notifications marked read");
        }
        Action::SavePreferences => {
            apply_dark_mode(app.dark_mode);
            let config = context.config_mut();
            config.dark_mode = app.dark_mode;
            config.sidebar_collapsed = app.nav.collapsed;
            context.save()?;
        }
        Action::ExpandWorkspace(workspace_id) => {
            app.nav.expand_workspace(client, &workspace_id).await?;
        }
        Action::OpenProject(scope) => {
            app.nav.expand_project(client, &scope).await?;
            open_project(app, client, context, scope).await?;
        }
        Action::OpenTask { scope, task_id } => {
            if app.current.as_ref() != Some(&scope) {
                open_project(app, client, context, scope).await?;
            }
            if !app.select_task(&task_id) {
                return Err(TaskboardError::NotFound(format!("Task {}", task_id)));
            }
        }
    }

    app.clamp_selection();
    Ok(())
}

/// Makes `scope` the current project, here and in the saved config.
async fn open_project(
    app: &mut InteractiveApp,
    client: &TaskboardClient,
    context: &mut CliContext,
    scope: ProjectScope,
) -> TaskboardResult<()> {
    let tasks = match app.nav.tasks_of(&scope) {
        Some(cached) => cached.to_vec(),
        None => client.get_tasks(&scope, &TaskQuery::default()).await?,
    };
    let name = app.nav.project(&scope).map(|p| p.project.name.clone());

    context.set_current_project(Some(CurrentProject {
        workspace_id: scope.workspace_id.clone(),
        project_id: scope.project_id.clone(),
        name: name.clone(),
    }))?;
    app.set_tasks(scope, name, tasks);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test: the flag and the hook are process-wide
    #[test]
    fn panic_restore_chains_and_runs_once() {
        TERMINAL_ACTIVE.store(true, Ordering::SeqCst);
        assert!(take_terminal_active());
        assert!(!take_terminal_active());

        install_panic_restore();
        install_panic_restore();
        let result = std::panic::catch_unwind(|| panic!("boom"));
        assert!(result.is_err());
        assert!(!TERMINAL_ACTIVE.load(Ordering::SeqCst));
    }
}
