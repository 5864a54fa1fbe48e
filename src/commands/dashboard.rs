use clap::ArgMatches;

use super::today;
use crate::cli_context::CliContext;
use crate::client::{ProjectScope, TaskboardClient};
use crate::dashboard::DashboardSummary;
use crate::error::TaskboardResult;
use crate::formatting::print_dashboard;
use crate::logging::log_debug;
use crate::models::{Project, Task};

pub async fn handle_dashboard(context: &mut CliContext, _matches: &ArgMatches) -> TaskboardResult<()> {
    let user = context.current_user().await?;
    let client = context.verified_client()?;

    let (projects, tasks) = collect_projects_and_tasks(&client).await?;
    log_debug(&format!(
        "Dashboard loaded {} projects and {} tasks",
        projects.len(),
        tasks.len()
    ));

    let today = today();
    let summary = DashboardSummary::build(&projects, &tasks, &user.id, today);
    print_dashboard(&user, &summary, today);
    Ok(())
}

/// Walks workspaces, then projects, then tasks, one request at a time.
pub async fn collect_projects_and_tasks(client: &TaskboardClient) -> TaskboardResult<(Vec<Project>, Vec<Task>)> {
    let mut projects = Vec::new();
    let mut tasks = Vec::new();

    for workspace in client.get_workspaces().await? {
        for project in client.get_projects(&workspace.id).await? {
            let scope = ProjectScope::new(workspace.id.clone(), project.id.clone());
            tasks.extend(client.get_tasks(&scope, &Default::default()).await?);
            projects.push(project);
        }
    }

    Ok((projects, tasks))
}
