//! Terminal reporter for sync operations

use colored::Colorize;
use confsync_core::{Error, Reporter, SyncReport, Warning};

/// Prints operation feedback: successes to stdout, warnings and failures to
/// stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn on_warn(&mut self, warning: &Warning) {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    fn on_success(&mut self, report: &SyncReport) {
        let label = if report.has_warnings() {
            "OK".yellow().bold()
        } else {
            "OK".green().bold()
        };
        println!("{} {}", label, report.summary());
    }

    fn on_fail(&mut self, error: &Error) {
        eprintln!("{}: {}", "error".red().bold(), error);
        match error {
            Error::SchemaValidationFailed { issues, .. } => {
                for issue in issues {
                    eprintln!("  {} {}", "!".red(), issue);
                }
            }
            Error::TransferFailed {
                hint: Some(hint), ..
            } => {
                eprintln!("  {} {}", "hint:".cyan(), hint);
            }
            _ => {}
        }
    }
}
