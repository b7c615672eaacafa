//! Push command implementation

use std::path::Path;

use confsync_fs::NormalizedPath;

use crate::context::AppContext;
use crate::error::Result;
use crate::reporter::ConsoleReporter;

/// Validate and publish the document at `file`.
pub fn run_push(ctx: &AppContext, file: &Path, env: Option<&str>) -> Result<()> {
    let engine = ctx.engine();
    engine.push(&NormalizedPath::new(file), env, &mut ConsoleReporter::new())?;
    Ok(())
}
