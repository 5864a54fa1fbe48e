use std::path::Path;

use chrono::NaiveDate;
use clap::ArgMatches;
use colored::*;

use super::{optional, output_format, parse_opt, required, scope_from, today, unknown};
use crate::cli_context::CliContext;
use crate::client::{ProjectScope, TaskboardClient};
use crate::error::{TaskboardError, TaskboardResult};
use crate::formatting::tables::{print_files, print_subtasks, print_task_detail, print_tasks};
use crate::formatting::print_success;
use crate::models::{SubtaskInput, TaskInput, TaskPriority, TaskQuery, TaskStatus};
use crate::validation::{parse_date, validate_subtask, validate_task};

pub async fn handle_tasks(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    let client = context.verified_client()?;
    let scope = scope_from(context, matches)?;

    match matches.subcommand() {
        Some(("list", sub)) => {
            let format = output_format(sub)?;
            let mut query = TaskQuery {
                status: parse_opt::<TaskStatus>(sub, "status")?,
                priority: parse_opt::<TaskPriority>(sub, "priority")?,
                assignee: None,
            };
            if sub.get_flag("mine") {
                query.assignee = Some(context.current_user().await?.id);
            }

            let mut tasks = client.get_tasks(&scope, &query).await?;
            // Backends that ignore query params still get filtered here
            tasks.retain(|t| {
                query.status.map_or(true, |s| t.status == s)
                    && query.priority.map_or(true, |p| t.priority == p)
                    && query.assignee.as_deref().map_or(true, |id| t.is_assigned_to(id))
            });
            print_tasks(&tasks, format, today());
        }
        Some(("show", sub)) => {
            let task_id = required(sub, "id")?;
            let task = client.get_task(&scope, task_id).await?;
            print_task_detail(&task, today());
            let me = context.current_user().await?;
            if task.is_followed_by(&me.id) {
                println!("{}", "You follow this task".dimmed());
            }

            let files = client.get_task_files(&scope, task_id).await?;
            if !files.is_empty() {
                println!("{}", "Files".bold());
                print_files(&files);
            }
        }
        Some(("create", sub)) => {
            let input = task_input(sub)?;
            if input.title.is_none() {
                return Err(TaskboardError::InvalidInput("Task title is required".to_string()));
            }

            let task = client.create_task(&scope, &input).await?;
            print_success(&format!("Created task {} ({})", task.title, task.id));
        }
        Some(("update", sub)) => {
            let task_id = required(sub, "id")?;
            let input = task_input(sub)?;
            if input.is_empty() {
                return Err(TaskboardError::InvalidInput(
                    "Nothing to update. Pass --title, --description, --status, --priority, --assignee or --due"
                        .to_string(),
                ));
            }

            let task = client.update_task(&scope, task_id, &input).await?;
            print_success(&format!("Updated task {}", task.title));
        }
        Some(("status", sub)) => {
            let task_id = required(sub, "id")?;
            let status: TaskStatus = required(sub, "status")?
                .parse()
                .map_err(TaskboardError::InvalidInput)?;

            let task = client.update_task_status(&scope, task_id, status).await?;
            print_success(&format!("{} is now {}", task.title, task.status.label()));
        }
        Some(("delete", sub)) => {
            let task_id = required(sub, "id")?;
            client.delete_task(&scope, task_id).await?;
            print_success(&format!("Deleted task {}", task_id));
        }
        Some(("subtasks", sub)) => handle_subtasks(&client, &scope, sub).await?,
        Some(("follow", sub)) => {
            let task_id = required(sub, "id")?;
            client.follow_task(&scope, task_id).await?;
            print_success(&format!("Following task {}", task_id));
        }
        Some(("unfollow", sub)) => {
            let task_id = required(sub, "id")?;
            client.unfollow_task(&scope, task_id).await?;
            print_success(&format!("Stopped following task {}", task_id));
        }
        Some(("files", sub)) => handle_files(&client, &scope, sub).await?,
        _ => return Err(unknown("tasks")),
    }

    Ok(())
}

/// Builds and validates the request body from create/update flags.
fn task_input(matches: &ArgMatches) -> TaskboardResult<TaskInput> {
    let due: Option<NaiveDate> = optional(matches, "due")
        .map(|raw| parse_date("due date", raw))
        .transpose()?;

    let input = TaskInput {
        title: optional(matches, "title").map(|s| s.trim().to_string()),
        description: optional(matches, "description").map(str::to_string),
        status: parse_opt::<TaskStatus>(matches, "status")?,
        priority: parse_opt::<TaskPriority>(matches, "priority")?,
        assignee: optional(matches, "assignee").map(str::to_string),
        due_date: due.map(|d| d.format("%Y-%m-%d").to_string()),
    };

    validate_task(input.title.as_deref(), input.description.as_deref(), due, today())?;
    Ok(input)
}

async fn handle_subtasks(client: &TaskboardClient, scope: &ProjectScope, matches: &ArgMatches) -> TaskboardResult<()> {
    match matches.subcommand() {
        Some(("list", sub)) => {
            let subtasks = client.get_subtasks(scope, required(sub, "task")?).await?;
            print_subtasks(&subtasks);
        }
        Some(("add", sub)) => {
            let task_id = required(sub, "task")?;
            let title = required(sub, "title")?.trim();
            validate_subtask(title)?;

            let subtask = client.create_subtask(scope, task_id, title).await?;
            print_success(&format!("Added subtask {} ({})", subtask.title, subtask.id));
        }
        Some((action @ ("done" | "undone"), sub)) => {
            let input = SubtaskInput {
                title: None,
                completed: Some(action == "done"),
            };
            let subtask = client
                .update_subtask(scope, required(sub, "task")?, required(sub, "subtask")?, &input)
                .await?;
            let state = if subtask.completed { "done" } else { "not done" };
            print_success(&format!("Marked {} {}", subtask.title, state));
        }
        Some(("delete", sub)) => {
            let subtask_id = required(sub, "subtask")?;
            client.delete_subtask(scope, required(sub, "task")?, subtask_id).await?;
            print_success(&format!("Deleted subtask {}", subtask_id));
        }
        _ => return Err(unknown("tasks subtasks")),
    }
    Ok(())
}

async fn handle_files(client: &TaskboardClient, scope: &ProjectScope, matches: &ArgMatches) -> TaskboardResult<()> {
    match matches.subcommand() {
        Some(("list", sub)) => {
            let files = client.get_task_files(scope, required(sub, "task")?).await?;
            print_files(&files);
        }
        Some(("upload", sub)) => {
            let path = Path::new(required(sub, "path")?);
            if !path.is_file() {
                return Err(TaskboardError::InvalidInput(format!("{} is not a file", path.display())));
            }

            let file = client.upload_task_file(scope, required(sub, "task")?, path).await?;
            print_success(&format!("Uploaded {} ({})", file.filename, file.id));
        }
        Some(("delete", sub)) => {
            let file_id = required(sub, "file")?;
            client.delete_task_file(scope, required(sub, "task")?, file_id).await?;
            print_success(&format!("Deleted file {}", file_id));
        }
        _ => return Err(unknown("tasks files")),
    }
    Ok(())
}
