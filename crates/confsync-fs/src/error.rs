//! Error types for confsync-fs

use std::path::PathBuf;

/// Result type for confsync-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in confsync-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse JSON at {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to serialize JSON for {}: {message}", .path.display())]
    ConfigSerialize { path: PathBuf, message: String },

    #[error("Invalid filename format: '{name}' (expected <project>@<version>.json)")]
    InvalidFilenameFormat { name: String },

    #[error("Invalid {label} '{value}': must be a single path segment without '/', '\\' or '..'")]
    InvalidSegment { label: &'static str, value: String },

    #[error("Lock acquisition failed for {}", .path.display())]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound { path };
        }
        Self::Io { path, source }
    }
}
