//! Error types for confsync-core

use std::path::PathBuf;

use confsync_fs::NormalizedPath;
use confsync_meta::ValidationIssue;

/// Result type for confsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Local file name does not follow `<project>@<version>.json`
    InvalidFilenameFormat,
    /// Document does not satisfy the schema
    SchemaValidationFailed,
    /// Local document is missing
    FileNotFound,
    /// Network failure or non-2xx response
    TransferFailed,
    /// The operator refused a confirmation
    Declined,
    /// Any other local problem (I/O, settings)
    Local,
}

/// Errors that can occur in sync operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid filename format: '{name}' (expected <project>@<version>.json)")]
    InvalidFilenameFormat { name: String },

    #[error("Schema validation failed for {path} ({} problem(s))", .issues.len())]
    SchemaValidationFailed {
        path: NormalizedPath,
        issues: Vec<ValidationIssue>,
    },

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Transfer failed{}: {message}", status_suffix(.status))]
    TransferFailed {
        status: Option<u16>,
        message: String,
        hint: Option<String>,
    },

    #[error("Revert of {address} cancelled")]
    RevertDeclined { address: String },

    #[error(transparent)]
    Local(confsync_fs::Error),

    #[error(transparent)]
    Settings(#[from] confsync_meta::Error),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

impl Error {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidFilenameFormat { .. } => FailureKind::InvalidFilenameFormat,
            Self::SchemaValidationFailed { .. } => FailureKind::SchemaValidationFailed,
            Self::FileNotFound { .. } => FailureKind::FileNotFound,
            Self::TransferFailed { .. } => FailureKind::TransferFailed,
            Self::RevertDeclined { .. } => FailureKind::Declined,
            Self::Local(_) | Self::Settings(_) => FailureKind::Local,
        }
    }

    /// Status code of a failed transfer, if the remote answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::TransferFailed { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<confsync_fs::Error> for Error {
    fn from(error: confsync_fs::Error) -> Self {
        match error {
            confsync_fs::Error::FileNotFound { path } => Self::FileNotFound { path },
            confsync_fs::Error::InvalidFilenameFormat { name } => {
                Self::InvalidFilenameFormat { name }
            }
            other => Self::Local(other),
        }
    }
}
