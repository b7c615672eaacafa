//! Error types for confsync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Sync failure, already delivered through the terminal reporter
    #[error(transparent)]
    Sync(#[from] confsync_core::Error),

    /// Error from confsync-meta
    #[error(transparent)]
    Meta(#[from] confsync_meta::Error),

    /// Error from confsync-fs
    #[error(transparent)]
    Fs(#[from] confsync_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl CliError {
    /// Whether the message has already been shown to the user
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Sync(_))
    }
}
