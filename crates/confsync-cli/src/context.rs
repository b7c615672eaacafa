//! Per-invocation context
//!
//! Resolves the store root and the settings location once, from flags and
//! environment, and hands out the store and sync engine built from them.

use std::path::{Path, PathBuf};

use confsync_core::{HttpRemote, SyncEngine};
use confsync_fs::{LocalStore, NormalizedPath};
use confsync_meta::EndpointSettings;

use crate::error::Result;

/// Where this invocation reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub root: NormalizedPath,
    pub settings_path: NormalizedPath,
}

impl AppContext {
    /// Build the context from CLI flags.
    ///
    /// A relative `root` is taken relative to `cwd`.
    pub fn resolve(cwd: &Path, root: &Path, settings: Option<PathBuf>) -> Result<Self> {
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            cwd.join(root)
        };
        let settings_path = match settings {
            Some(path) => path,
            None => EndpointSettings::default_path()?,
        };
        tracing::debug!(root = %root.display(), settings = %settings_path.display(), "resolved context");
        Ok(Self {
            root: NormalizedPath::new(root),
            settings_path: NormalizedPath::new(settings_path),
        })
    }

    pub fn store(&self) -> LocalStore {
        LocalStore::new(self.root.clone())
    }

    /// Sync engine talking to the configured endpoint.
    ///
    /// The settings file is read on the first request, after the local
    /// checks of the operation have passed.
    pub fn engine(&self) -> SyncEngine<HttpRemote> {
        let remote = HttpRemote::from_settings_file(self.settings_path.clone());
        SyncEngine::new(self.store(), remote)
    }
}
