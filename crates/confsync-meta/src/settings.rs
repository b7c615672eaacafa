//! Endpoint settings
//!
//! The settings file records where the remote service lives and the token
//! to authenticate with. It is written by `confsync init` and read once per
//! invocation by every operation that talks to the remote.
//!
//! ```json
//! {
//!   "api": "https://configs.example.com",
//!   "token": "s3cr3t"
//! }
//! ```

use std::path::PathBuf;

use confsync_fs::{Error as FsError, NormalizedPath, io};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Directory under the user config dir that holds confsync state
const SETTINGS_DIR: &str = "confsync";

/// Settings file name
const SETTINGS_FILE: &str = "settings.json";

/// Persisted connection settings for the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSettings {
    /// Base URL of the remote API, without a trailing slash
    pub api: String,
    /// Opaque authentication token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl EndpointSettings {
    /// Build settings, checking the API url.
    pub fn new(api: &str, token: Option<String>) -> Result<Self> {
        let api = api.trim().trim_end_matches('/');
        if !(api.starts_with("http://") || api.starts_with("https://")) {
            return Err(Error::InvalidApiUrl {
                url: api.to_string(),
            });
        }
        Ok(Self {
            api: api.to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Default location: `<user config dir>/confsync/settings.json`.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
            .ok_or(Error::NoConfigDir)
    }

    /// Load settings from `path`.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let settings: Self = io::read_json(path).map_err(|e| match e {
            FsError::FileNotFound { path } => Error::SettingsNotFound { path },
            FsError::ConfigParse { path, message } => Error::InvalidSettings { path, message },
            other => Error::Fs(other),
        })?;
        tracing::debug!(path = %path, api = %settings.api, "loaded endpoint settings");
        Self::new(&settings.api, settings.token)
    }

    /// Write settings to `path`, replacing any previous record.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        io::write_json_pretty(path, self)?;
        Ok(())
    }
}
