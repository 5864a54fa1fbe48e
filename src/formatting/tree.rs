use colored::*;

use super::theme::{SemanticColor, ThemedColorize};
use crate::navigation::{NodeRef, TreeRow};

/// Expansion marker for a row: ▾ open, ▸ closed, · leaf.
pub fn row_marker(row: &TreeRow) -> &'static str {
    match row.node {
        NodeRef::Task { .. } => "·",
        _ if row.expanded => "▾",
        _ => "▸",
    }
}

pub fn print_tree(rows: &[TreeRow]) {
    if rows.is_empty() {
        println!("{}", "No workspaces yet.".dimmed());
        return;
    }

    for row in rows {
        let label = match row.node {
            NodeRef::Workspace { .. } => row.label.with_theme(SemanticColor::Workspace).bold(),
            NodeRef::Project(_) => row.label.with_theme(SemanticColor::Project),
            NodeRef::Task { .. } => row.label.normal(),
        };
        let hint = if row.expanded && !row.loaded { " (loading…)".dimmed().to_string() } else { String::new() };
        println!("{}{} {}{}", "  ".repeat(row.depth), row_marker(row).dimmed(), label, hint);
    }
}
