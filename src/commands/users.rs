use clap::ArgMatches;
use colored::*;

use super::{optional, output_format, required, unknown};
use crate::cli_context::CliContext;
use crate::error::{TaskboardError, TaskboardResult};
use crate::formatting::print_success;
use crate::formatting::tables::{print_field, print_users};
use crate::models::UserUpdate;
use crate::validation::validate_user_update;

pub async fn handle_users(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    let client = context.verified_client()?;

    match matches.subcommand() {
        Some(("list", sub)) => {
            let users = client.get_users().await?;
            print_users(&users, output_format(sub)?);
        }
        Some(("search", sub)) => {
            let query = required(sub, "query")?.trim();
            let users = client.search_users(query).await?;
            print_users(&users, output_format(sub)?);
        }
        Some(("show", sub)) => {
            let user = client.get_user(required(sub, "id")?).await?;
            println!("{}", user.name.bold().green());
            print_field("Email", &user.email);
            print_field("ID", user.id.dimmed());
            if let Some(role) = &user.role {
                print_field("Role", role);
            }
        }
        Some(("update", sub)) => {
            let update = UserUpdate {
                name: optional(sub, "name").map(|s| s.trim().to_string()),
                email: optional(sub, "email").map(|s| s.trim().to_string()),
            };
            if update.name.is_none() && update.email.is_none() {
                return Err(TaskboardError::InvalidInput("Nothing to update. Pass --name or --email".to_string()));
            }
            validate_user_update(update.name.as_deref(), update.email.as_deref())?;

            let user_id = required(sub, "id")?;
            let user = client.update_user(user_id, &update).await?;

            // Keep the cached session user in step with the backend
            if context.config().user.as_ref().map(|u| u.id == user.id).unwrap_or(false) {
                context.config_mut().user = Some(user.clone());
                context.save()?;
            }
            print_success(&format!("Updated {} <{}>", user.name, user.email));
        }
        _ => return Err(unknown("users")),
    }

    Ok(())
}
