use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::client::ProjectScope;
use crate::error::TaskboardResult;
use crate::formatting::print_tree;
use crate::navigation::NavTree;

/// Prints workspaces with their projects; `--all` also lists each project's tasks.
pub async fn handle_tree(context: &mut CliContext, matches: &ArgMatches) -> TaskboardResult<()> {
    let client = context.verified_client()?;
    let expand_projects = matches.get_flag("all");

    let mut tree = NavTree::new(false);
    tree.set_workspaces(client.get_workspaces().await?);

    let workspace_ids: Vec<String> = tree.workspaces.iter().map(|w| w.workspace.id.clone()).collect();
    for workspace_id in &workspace_ids {
        tree.expand_workspace(&client, workspace_id).await?;

        if expand_projects {
            let scopes: Vec<ProjectScope> = tree
                .workspaces
                .iter()
                .filter(|w| &w.workspace.id == workspace_id)
                .flat_map(|w| w.projects.iter().flatten())
                .map(|p| ProjectScope::new(workspace_id.clone(), p.project.id.clone()))
                .collect();
            for scope in &scopes {
                tree.expand_project(&client, scope).await?;
            }
        }
    }

    print_tree(&tree.visible_rows());
    Ok(())
}
