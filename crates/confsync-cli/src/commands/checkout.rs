//! Checkout command implementation

use crate::context::AppContext;
use crate::error::Result;
use crate::reporter::ConsoleReporter;

/// Fetch one exact version of `project` into the store.
pub fn run_checkout(ctx: &AppContext, project: &str, version: &str, env: Option<&str>) -> Result<()> {
    let engine = ctx.engine();
    engine.checkout(project, version, env, &mut ConsoleReporter::new())?;
    Ok(())
}
