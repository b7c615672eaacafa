//! Diff command implementation
//!
//! Compares two documents key by key.

use std::path::Path;

use colored::Colorize;
use confsync_fs::{NormalizedPath, io};
use confsync_meta::{DocumentChange, DocumentDiff};
use serde_json::{Value, json};

use crate::error::Result;

/// Print the structural differences from `old` to `new`.
pub fn run_diff(old: &Path, new: &Path, json: bool) -> Result<()> {
    let old_doc: Value = io::read_json(&NormalizedPath::new(old))?;
    let new_doc: Value = io::read_json(&NormalizedPath::new(new))?;
    let diff = DocumentDiff::compute(&old_doc, &new_doc);

    if json {
        let output = json!({
            "old": old.display().to_string(),
            "new": new.display().to_string(),
            "equivalent": diff.is_equivalent,
            "similarity": diff.similarity,
            "changes": diff.changes,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_diff(old, new, &diff);
    }
    Ok(())
}

fn print_diff(old: &Path, new: &Path, diff: &DocumentDiff) {
    if diff.is_equivalent {
        println!("{} Documents are identical.", "OK".green().bold());
        return;
    }

    println!(
        "{} {} -> {}",
        "Diff".blue().bold(),
        old.display().to_string().yellow(),
        new.display().to_string().yellow()
    );
    println!();

    for change in &diff.changes {
        match change {
            DocumentChange::Added { path, value } => {
                println!("  {} {} = {}", "+".green(), path.green(), value);
            }
            DocumentChange::Removed { path, value } => {
                println!("  {} {} = {}", "-".red(), path.red(), value);
            }
            DocumentChange::Modified { path, old, new } => {
                println!("  {} {}: {} -> {}", "~".yellow(), path.yellow(), old, new);
            }
        }
    }

    println!();
    println!(
        "{} {} change(s), {:.0}% similar",
        "Total:".dimmed(),
        diff.changes.len(),
        diff.similarity * 100.0
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_diff_runs_on_two_documents() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("atlas@1.json");
        let b = temp.path().join("atlas@2.json");
        fs::write(&a, r#"{"name":"atlas","version":"1","config":{"a":1}}"#).unwrap();
        fs::write(&b, r#"{"name":"atlas","version":"2","config":{"a":2,"b":true}}"#).unwrap();

        assert!(run_diff(&a, &b, false).is_ok());
        assert!(run_diff(&a, &b, true).is_ok());
    }

    #[test]
    fn test_diff_missing_file() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("missing.json");
        assert!(run_diff(&a, &a, false).is_err());
    }
}
