use std::io::{self, BufRead, IsTerminal, Write};

use chrono::Utc;
use clap::ArgMatches;
use colored::*;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::{optional, required, unknown};
use crate::cli_context::CliContext;
use crate::error::{ErrorContext, TaskboardError, TaskboardResult};
use crate::formatting::print_success;
use crate::formatting::tables::print_field;
use crate::session::{inspect_token, TokenState};
use crate::validation::{validate_login, validate_registration};

pub async fn handle_auth(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    match matches.subcommand() {
        Some(("login", sub)) => handle_login(context, sub).await,
        Some(("register", sub)) => handle_register(context, sub).await,
        Some(("logout", _)) => handle_logout(context),
        Some(("whoami", _)) => handle_whoami(context).await,
        _ => Err(unknown("auth")),
    }
}

fn password_from(matches: &ArgMatches) -> TaskboardResult<String> {
    if let Some(password) = optional(matches, "password") {
        return Ok(password.to_string());
    }

    if !io::stdin().is_terminal() {
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Reading password from stdin")?;
        return Ok(line.trim_end_matches(['\r', '\n']).to_string());
    }

    eprint!("Password (hidden; --password or a pipe also work): ");
    io::stderr().flush()?;

    enable_raw_mode().map_err(|e| TaskboardError::TerminalError(e.to_string()))?;
    let result = read_hidden_line();
    let restored = disable_raw_mode().map_err(|e| TaskboardError::TerminalError(e.to_string()));
    eprintln!();

    let password = result?;
    restored?;
    Ok(password)
}

#[derive(Debug, PartialEq)]
pub(crate) enum PromptStep {
    Continue,
    Done,
    Cancelled,
}

/// Applies one key press to a hidden input buffer.
pub(crate) fn apply_prompt_key(buffer: &mut String, key: KeyEvent) -> PromptStep {
    if key.kind != KeyEventKind::Press {
        return PromptStep::Continue;
    }
    match key.code {
        KeyCode::Enter => PromptStep::Done,
        KeyCode::Esc => PromptStep::Cancelled,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => PromptStep::Cancelled,
        KeyCode::Backspace => {
            buffer.pop();
            PromptStep::Continue
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            PromptStep::Continue
        }
        _ => PromptStep::Continue,
    }
}

fn read_hidden_line() -> TaskboardResult<String> {
    let mut buffer = String::new();
    loop {
        let event = event::read().map_err(|e| TaskboardError::TerminalError(e.to_string()))?;
        if let Event::Key(key) = event {
            match apply_prompt_key(&mut buffer, key) {
                PromptStep::Continue => {}
                PromptStep::Done => return Ok(buffer),
                PromptStep::Cancelled => {
                    return Err(TaskboardError::InvalidInput("Password prompt cancelled".to_string()))
                }
            }
        }
    }
}

async fn handle_login(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    let email = required(matches, "email")?.trim();
    let password = password_from(matches)?;
    validate_login(email, &password)?;

    let client = context.anonymous_client()?;
    let auth = client.login(email, &password).await?;
    let name = auth.user.name.clone();
    context.set_session(auth)?;

    print_success(&format!("Logged in as {}", name));
    Ok(())
}

async fn handle_register(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    let name = required(matches, "name")?.trim();
    let email = required(matches, "email")?.trim();
    let password = password_from(matches)?;
    validate_registration(name, email, &password)?;

    let client = context.anonymous_client()?;
    let auth = client.register(name, email, &password).await?;
    context.set_session(auth)?;

    print_success(&format!("Account created. Welcome, {}!", name));
    Ok(())
}

fn handle_logout(context: &mut CliContext) -> TaskboardResult<()> {
    if !context.has_token() {
        println!("Not logged in.");
        return Ok(());
    }
    context.clear_session()?;
    print_success("Logged out");
    Ok(())
}

async fn handle_whoami(context: &mut CliContext) -> TaskboardResult<()> {
    let token = context.token().ok_or(TaskboardError::NotAuthenticated)?.to_string();

    // An expired token would only earn a 401, which clears the session
    // before anything could be reported.
    let state = inspect_token(&token, Utc::now());
    if let TokenState::Expired(claims) = &state {
        if let Some(expiry) = claims.expires_at() {
            print_field("Token expired", format!("{}", expiry.format("%Y-%m-%d %H:%M UTC")).red());
        }
        if let Some(email) = &claims.email {
            print_field("Email", email);
        }
        eprintln!("{}", "Run 'taskboard auth login --email <EMAIL>' to sign in again.".dimmed());
        return Ok(());
    }

    // The backend is the authority; a stale cached user would hide a revoked token.
    let client = context.verified_client()?;
    let user = client.current_user().await?;

    println!("{} {} ({})", "Logged in as:".bold(), user.name.green(), user.email);
    print_field("User ID", &user.id);
    if let Some(role) = &user.role {
        print_field("Role", role);
    }
    print_field("API", context.api_url());

    match state {
        TokenState::Valid(claims) => {
            if let Some(issued) = claims.issued_at() {
                print_field("Token issued", issued.format("%Y-%m-%d %H:%M UTC"));
            }
            match claims.expires_at() {
                Some(expiry) => print_field("Token expires", expiry.format("%Y-%m-%d %H:%M UTC")),
                None => print_field("Token expires", "never".dimmed()),
            }
        }
        _ => print_field("Token", "opaque (not a JWT)".dimmed()),
    }

    Ok(())
}
