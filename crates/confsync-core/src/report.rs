//! Operation outcomes and the reporting interface

use std::fmt;

use confsync_fs::{Address, NormalizedPath};
use confsync_meta::ValidationIssue;

use crate::Error;

/// The four synchronization operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Pull,
    Push,
    Checkout,
    Revert,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Checkout => "checkout",
            Self::Revert => "revert",
        };
        f.write_str(name)
    }
}

/// Non-fatal findings raised while an operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A stored document does not satisfy the schema; it is kept as-is.
    SchemaInvalid {
        path: NormalizedPath,
        issues: Vec<ValidationIssue>,
    },
    /// The document's embedded identity differs from what was asked for.
    NameVersionMismatch {
        requested_name: String,
        requested_version: Option<String>,
        found_name: Option<String>,
        found_version: Option<String>,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaInvalid { path, issues } => {
                write!(f, "{} does not match the document schema", path)?;
                for issue in issues {
                    write!(f, "\n  {}", issue)?;
                }
                Ok(())
            }
            Self::NameVersionMismatch {
                requested_name,
                requested_version,
                found_name,
                found_version,
            } => write!(
                f,
                "requested {}@{} but document identifies as {}@{}",
                requested_name,
                requested_version.as_deref().unwrap_or("latest"),
                found_name.as_deref().unwrap_or("<missing>"),
                found_version.as_deref().unwrap_or("<missing>"),
            ),
        }
    }
}

/// Summary of a completed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub operation: Operation,
    pub address: Address,
    /// Local document written (pull, checkout) or transmitted (push, revert)
    pub path: NormalizedPath,
    /// Remote status code for push and revert
    pub status: Option<u16>,
    pub warnings: Vec<Warning>,
}

impl SyncReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        match (self.operation, self.status) {
            (Operation::Pull | Operation::Checkout, _) => {
                format!("Saved {} to {}", self.address, self.path)
            }
            (op, Some(status)) => format!("{} {} accepted (HTTP {})", op, self.address, status),
            (op, None) => format!("{} {} completed", op, self.address),
        }
    }
}

/// Receives feedback from sync operations.
///
/// `on_warn` may fire several times during one operation; exactly one of
/// `on_success` or `on_fail` fires at the end.
pub trait Reporter {
    fn on_warn(&mut self, warning: &Warning);
    fn on_success(&mut self, report: &SyncReport);
    fn on_fail(&mut self, error: &Error);
}
