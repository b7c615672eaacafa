//! Revert command implementation

use crate::context::AppContext;
use crate::error::Result;
use crate::interactive;
use crate::reporter::ConsoleReporter;

/// Republish a stored version as the latest.
///
/// With `yes` the mismatch confirmation is answered automatically.
pub fn run_revert(
    ctx: &AppContext,
    project: &str,
    version: &str,
    env: Option<&str>,
    yes: bool,
) -> Result<()> {
    let engine = ctx.engine();
    engine.revert(
        project,
        version,
        env,
        |prompt| yes || interactive::confirm(prompt),
        &mut ConsoleReporter::new(),
    )?;
    Ok(())
}
