use clap::ArgMatches;

use super::{optional, output_format, parse_opt, required, unknown};
use crate::cli_context::CliContext;
use crate::error::{TaskboardError, TaskboardResult};
use crate::formatting::tables::{print_members, print_workspace_detail, print_workspaces};
use crate::formatting::print_success;
use crate::models::{MemberRole, WorkspaceInput};
use crate::validation::validate_workspace;

pub async fn handle_workspaces(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    let client = context.verified_client()?;

    match matches.subcommand() {
        Some(("list", sub)) => {
            let format = output_format(sub)?;
            let workspaces = client.get_workspaces().await?;
            print_workspaces(&workspaces, format);
        }
        Some(("show", sub)) => {
            let workspace = client.get_workspace(required(sub, "id")?).await?;
            print_workspace_detail(&workspace);
        }
        Some(("create", sub)) => {
            let input = workspace_input(sub);
            if input.name.is_none() {
                return Err(TaskboardError::InvalidInput("Workspace name is required".to_string()));
            }
            validate_workspace(input.name.as_deref(), input.description.as_deref())?;

            let workspace = client.create_workspace(&input).await?;
            print_success(&format!("Created workspace {} ({})", workspace.name, workspace.id));
        }
        Some(("update", sub)) => {
            let id = required(sub, "id")?;
            let input = workspace_input(sub);
            if input.name.is_none() && input.description.is_none() {
                return Err(TaskboardError::InvalidInput(
                    "Nothing to update. Pass --name or --description".to_string(),
                ));
            }
            validate_workspace(input.name.as_deref(), input.description.as_deref())?;

            let workspace = client.update_workspace(id, &input).await?;
            print_success(&format!("Updated workspace {}", workspace.name));
        }
        Some(("delete", sub)) => {
            let id = required(sub, "id")?;
            client.delete_workspace(id).await?;

            // A current project inside the deleted workspace no longer resolves
            if context
                .config()
                .current_project
                .as_ref()
                .map(|c| c.workspace_id == id)
                .unwrap_or(false)
            {
                context.set_current_project(None)?;
            }
            print_success(&format!("Deleted workspace {}", id));
        }
        Some(("members", sub)) => match sub.subcommand() {
            Some(("list", m)) => {
                let members = client.get_workspace_members(required(m, "workspace")?).await?;
                print_members(&members);
            }
            Some(("add", m)) => {
                let workspace_id = required(m, "workspace")?;
                let user_id = required(m, "user")?;
                let role = parse_opt::<MemberRole>(m, "role")?.unwrap_or_default();
                client.add_workspace_member(workspace_id, user_id, role).await?;
                print_success(&format!("Added {} as {}", user_id, role));
            }
            Some(("remove", m)) => {
                let workspace_id = required(m, "workspace")?;
                let user_id = required(m, "user")?;
                client.remove_workspace_member(workspace_id, user_id).await?;
                print_success(&format!("Removed {} from workspace", user_id));
            }
            _ => return Err(unknown("workspaces members")),
        },
        _ => return Err(unknown("workspaces")),
    }

    Ok(())
}

fn workspace_input(matches: &ArgMatches) -> WorkspaceInput {
    WorkspaceInput {
        name: optional(matches, "name").map(|s| s.trim().to_string()),
        description: optional(matches, "description").map(str::to_string),
    }
}
