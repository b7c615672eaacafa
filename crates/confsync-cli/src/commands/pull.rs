//! Pull command implementation

use crate::context::AppContext;
use crate::error::Result;
use crate::reporter::ConsoleReporter;

/// Fetch the latest document of `project` into the store.
pub fn run_pull(ctx: &AppContext, project: &str, env: Option<&str>) -> Result<()> {
    let engine = ctx.engine();
    engine.pull(project, env, &mut ConsoleReporter::new())?;
    Ok(())
}
