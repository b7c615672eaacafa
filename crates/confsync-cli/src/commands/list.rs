//! List command implementation

use std::collections::BTreeMap;

use colored::Colorize;
use confsync_fs::StoredEntry;
use serde_json::json;

use crate::context::AppContext;
use crate::error::Result;

/// Label used for documents outside any named environment
const DEFAULT_ENV_LABEL: &str = "default";

/// List stored documents grouped by project and environment.
pub fn run_list(ctx: &AppContext, project: Option<&str>, json: bool) -> Result<()> {
    let entries: Vec<StoredEntry> = ctx
        .store()
        .list()?
        .into_iter()
        .filter(|entry| project.is_none_or(|p| entry.address.project == p))
        .collect();

    if json {
        let output: Vec<_> = entries
            .iter()
            .map(|entry| {
                json!({
                    "project": entry.address.project,
                    "environment": entry.address.environment,
                    "version": entry.address.version,
                    "path": entry.path.as_str(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!(
            "No configurations found in {}. Run {} to fetch one.",
            ctx.root.as_str().yellow(),
            "confsync pull <project>".cyan()
        );
        return Ok(());
    }

    for (project, environments) in group(&entries) {
        println!("{}", project.cyan().bold());
        for (env, versions) in environments {
            println!("  {:<12} {}", format!("{}:", env).dimmed(), versions.join(", "));
        }
    }

    println!();
    println!("{} {} document(s)", "Total:".dimmed(), entries.len());
    Ok(())
}

/// project -> environment label -> versions, with the default environment
/// ahead of named ones.
fn group(entries: &[StoredEntry]) -> BTreeMap<&str, Vec<(&str, Vec<&str>)>> {
    let mut grouped: BTreeMap<&str, Vec<(&str, Vec<&str>)>> = BTreeMap::new();
    for entry in entries {
        let env = entry
            .address
            .environment
            .as_deref()
            .unwrap_or(DEFAULT_ENV_LABEL);
        let environments = grouped.entry(entry.address.project.as_str()).or_default();
        match environments.iter_mut().find(|(label, _)| *label == env) {
            Some((_, versions)) => versions.push(entry.address.version.as_str()),
            None => environments.push((env, vec![entry.address.version.as_str()])),
        }
    }
    grouped
}
