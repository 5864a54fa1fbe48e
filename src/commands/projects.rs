use chrono::NaiveDate;
use clap::ArgMatches;

use super::{optional, output_format, parse_opt, required, scope_from, today, unknown};
use crate::cli_context::CliContext;
use crate::client::{ProjectScope, TaskboardClient};
use crate::config::CurrentProject;
use crate::error::{TaskboardError, TaskboardResult};
use crate::formatting::tables::{print_project_detail, print_projects, print_user_refs};
use crate::formatting::print_success;
use crate::logging::log_debug;
use crate::models::{ProjectInput, ProjectStatus};
use crate::validation::{parse_date, validate_project};

pub async fn handle_projects(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    let client = context.verified_client()?;

    match matches.subcommand() {
        Some(("list", sub)) => {
            let format = output_format(sub)?;
            let workspace_id = context.resolve_workspace(optional(sub, "workspace"))?;
            let projects = client.get_projects(&workspace_id).await?;
            print_projects(&projects, format);
        }
        Some(("show", sub)) => {
            let scope = scope_with_id(context, sub)?;
            let project = client.get_project(&scope).await?;
            let tasks = client.get_tasks(&scope, &Default::default()).await?;
            print_project_detail(&project, &tasks, today());
        }
        Some(("create", sub)) => {
            let workspace_id = context.resolve_workspace(optional(sub, "workspace"))?;
            let input = project_input(sub)?;
            if input.name.is_none() {
                return Err(TaskboardError::InvalidInput("Project name is required".to_string()));
            }

            let project = client.create_project(&workspace_id, &input).await?;
            print_success(&format!("Created project {} ({})", project.name, project.id));
        }
        Some(("update", sub)) => {
            let scope = scope_with_id(context, sub)?;
            let input = project_input(sub)?;
            if input.name.is_none() && input.description.is_none() && input.status.is_none() && input.deadline.is_none() {
                return Err(TaskboardError::InvalidInput(
                    "Nothing to update. Pass --name, --description, --status or --deadline".to_string(),
                ));
            }

            let project = client.update_project(&scope, &input).await?;
            print_success(&format!("Updated project {}", project.name));
        }
        Some(("delete", sub)) => {
            let scope = scope_with_id(context, sub)?;
            client.delete_project(&scope).await?;

            if context
                .config()
                .current_project
                .as_ref()
                .map(|c| c.project_id == scope.project_id)
                .unwrap_or(false)
            {
                context.set_current_project(None)?;
            }
            print_success(&format!("Deleted project {}", scope.project_id));
        }
        Some(("use", sub)) => handle_use(context, &client, sub).await?,
        Some(("members", sub)) => {
            let scope = scope_from(context, sub)?;
            match sub.subcommand() {
                Some(("list", _)) => {
                    let members = client.get_project_members(&scope).await?;
                    print_user_refs(&members);
                }
                Some(("add", m)) => {
                    let user_id = required(m, "user")?;
                    client.add_project_member(&scope, user_id).await?;
                    print_success(&format!("Added {} to project", user_id));
                }
                Some(("remove", m)) => {
                    let user_id = required(m, "user")?;
                    client.remove_project_member(&scope, user_id).await?;
                    print_success(&format!("Removed {} from project", user_id));
                }
                _ => return Err(unknown("projects members")),
            }
        }
        _ => return Err(unknown("projects")),
    }

    Ok(())
}

fn scope_with_id(context: &CliContext, matches: &ArgMatches) -> TaskboardResult<ProjectScope> {
    let workspace_id = context.resolve_workspace(optional(matches, "workspace"))?;
    Ok(ProjectScope::new(workspace_id, required(matches, "id")?))
}

/// Builds and validates the request body from create/update flags.
fn project_input(matches: &ArgMatches) -> TaskboardResult<ProjectInput> {
    let deadline: Option<NaiveDate> = optional(matches, "deadline")
        .map(|raw| parse_date("deadline", raw))
        .transpose()?;

    let input = ProjectInput {
        name: optional(matches, "name").map(|s| s.trim().to_string()),
        description: optional(matches, "description").map(str::to_string),
        status: parse_opt::<ProjectStatus>(matches, "status")?,
        deadline: deadline.map(|d| d.format("%Y-%m-%d").to_string()),
    };

    validate_project(input.name.as_deref(), input.description.as_deref(), deadline, today())?;
    Ok(input)
}

async fn handle_use(context: &mut CliContext, client: &TaskboardClient, matches: &ArgMatches) -> TaskboardResult<()> {
    if matches.get_flag("clear") {
        context.set_current_project(None)?;
        print_success("Cleared the current project");
        return Ok(());
    }

    let project_id = required(matches, "id")?;
    let workspace_id = match optional(matches, "workspace") {
        Some(id) => id.to_string(),
        None => find_workspace_of(client, project_id).await?,
    };

    let scope = ProjectScope::new(workspace_id.clone(), project_id);
    let project = client.get_project(&scope).await?;

    context.set_current_project(Some(CurrentProject {
        workspace_id,
        project_id: project.id.clone(),
        name: Some(project.name.clone()),
    }))?;
    print_success(&format!("Now using project {}", project.name));
    Ok(())
}

/// Finds which of the user's workspaces holds `project_id`.
async fn find_workspace_of(client: &TaskboardClient, project_id: &str) -> TaskboardResult<String> {
    for workspace in client.get_workspaces().await? {
        let projects = client.get_projects(&workspace.id).await?;
        if projects.iter().any(|p| p.id == project_id) {
            log_debug(&format!("Project {} found in workspace {}", project_id, workspace.id));
            return Ok(workspace.id);
        }
    }
    Err(TaskboardError::NotFound(format!("Project {} not found in any workspace", project_id)))
}
