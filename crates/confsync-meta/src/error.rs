//! Error types for confsync-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] confsync_fs::Error),

    #[error("No endpoint settings at {}. Run `confsync init` first.", .path.display())]
    SettingsNotFound { path: PathBuf },

    #[error("Invalid endpoint settings at {}: {message}", .path.display())]
    InvalidSettings { path: PathBuf, message: String },

    #[error("Invalid API url '{url}': expected an http:// or https:// address")]
    InvalidApiUrl { url: String },

    #[error("Could not determine a configuration directory for settings")]
    NoConfigDir,
}
