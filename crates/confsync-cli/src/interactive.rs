//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based input.

use colored::Colorize;
use dialoguer::{Confirm, Input};

use crate::error::Result;

/// Ask a yes/no question, defaulting to no.
///
/// Without a terminal the prompt cannot be answered and counts as "no".
pub fn confirm(prompt: &str) -> bool {
    match Confirm::new().with_prompt(prompt).default(false).interact() {
        Ok(answer) => answer,
        Err(e) => {
            tracing::debug!(error = %e, "confirmation prompt unavailable");
            eprintln!(
                "{} no terminal to confirm; pass {} to proceed",
                "note:".dimmed(),
                "--yes".cyan()
            );
            false
        }
    }
}

/// Prompt for the endpoint url and optional token.
pub fn prompt_endpoint(current: Option<&str>) -> Result<(String, Option<String>)> {
    println!();
    let mut api = Input::<String>::new().with_prompt("API url");
    if let Some(current) = current {
        api = api.default(current.to_string());
    }
    let api = api.interact_text()?;

    let token: String = Input::new()
        .with_prompt("Token (leave empty for none)")
        .allow_empty(true)
        .interact_text()?;

    let token = if token.trim().is_empty() {
        None
    } else {
        Some(token)
    };
    Ok((api, token))
}
