//! Environment folder scaffolding

use colored::Colorize;
use confsync_fs::Address;

use crate::context::AppContext;
use crate::error::Result;

/// Create `<root>/<project>/env/<environment>/`.
pub fn run_env(ctx: &AppContext, project: &str, environment: &str) -> Result<()> {
    Address::check_scope(project, Some(environment))?;
    let dir = ctx.store().scaffold_environment(project, environment)?;
    println!(
        "{} Environment {} ready at {}",
        "OK".green().bold(),
        environment.cyan(),
        dir.as_str().yellow()
    );
    Ok(())
}
