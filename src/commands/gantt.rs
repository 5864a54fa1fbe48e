use clap::ArgMatches;
use colored::*;

use super::{scope_from, today};
use crate::cli_context::CliContext;
use crate::error::TaskboardResult;
use crate::formatting::print_gantt;
use crate::gantt::GanttLayout;

pub async fn handle_gantt(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    let client = context.verified_client()?;
    let scope = scope_from(context, matches)?;

    let project = client.get_project(&scope).await?;
    let tasks = client.get_tasks(&scope, &Default::default()).await?;

    let today = today();
    let layout = GanttLayout::compute(&tasks, today);

    println!("\n{} {}\n", "Timeline:".bold(), project.name.bold().magenta());
    print_gantt(&layout, today);
    Ok(())
}
