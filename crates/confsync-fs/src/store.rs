//! Local document store
//!
//! Documents live under a single root directory using the layout described
//! in [`crate::address`]. Entries are only ever created or overwritten; the
//! store never deletes documents on its own.

use std::fs;

use serde_json::Value;

use crate::{Address, Error, NormalizedPath, Result, StorePath, io, parse_file_name};

/// A document found on disk while walking the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub address: Address,
    pub path: NormalizedPath,
}

/// Filesystem-backed store of configuration documents.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: NormalizedPath,
}

impl LocalStore {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Canonical location of `address` in this store.
    pub fn path_for(&self, address: &Address) -> NormalizedPath {
        address.resolve(&self.root)
    }

    /// Load and parse a JSON document.
    ///
    /// # Errors
    ///
    /// [`Error::FileNotFound`] if the path does not exist, [`Error::ConfigParse`]
    /// if its content is not valid JSON.
    pub fn load(&self, path: &NormalizedPath) -> Result<Value> {
        io::read_json(path)
    }

    /// Load the raw text of a document, exactly as stored.
    pub fn load_text(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text(path)
    }

    /// Persist `document` at the location of `address`.
    ///
    /// Missing directories are created and an existing file at the same
    /// address is overwritten. Returns the path written.
    pub fn save(&self, address: &Address, document: &Value) -> Result<NormalizedPath> {
        let path = self.path_for(address);
        io::write_json_pretty(&path, document)?;
        tracing::info!(%address, path = %path, "saved document");
        Ok(path)
    }

    /// Create the folder for a named environment of `project`.
    ///
    /// A placeholder file is written so the folder survives in version
    /// control. Calling this for an existing environment is a no-op.
    pub fn scaffold_environment(&self, project: &str, environment: &str) -> Result<NormalizedPath> {
        let dir = Address::new(project, "", Some(environment)).directory(&self.root);
        let placeholder = dir.join(StorePath::Placeholder.as_str());
        if !placeholder.exists() {
            io::write_text(&placeholder, "")?;
        }
        Ok(dir)
    }

    /// Enumerate every well-named document in the store.
    ///
    /// Results are ordered by project, then environment (default first),
    /// then version. Files that do not follow the naming pattern are skipped.
    pub fn list(&self) -> Result<Vec<StoredEntry>> {
        let mut entries = Vec::new();
        if !self.root.is_dir() {
            return Ok(entries);
        }

        for project_dir in subdirectories(&self.root)? {
            let Some(project) = project_dir.file_name().map(str::to_string) else {
                continue;
            };
            collect_documents(&project_dir, None, &mut entries)?;

            let env_root = project_dir.join(StorePath::EnvDir.as_str());
            if env_root.is_dir() {
                for env_dir in subdirectories(&env_root)? {
                    let env = env_dir.file_name().map(str::to_string);
                    collect_documents(&env_dir, env.as_deref(), &mut entries)?;
                }
            }
            tracing::debug!(project = %project, "scanned project directory");
        }

        entries.sort_by(|a, b| {
            (&a.address.project, &a.address.environment, &a.address.version).cmp(&(
                &b.address.project,
                &b.address.environment,
                &b.address.version,
            ))
        });
        Ok(entries)
    }
}

fn subdirectories(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native = dir.to_native();
    let read = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;
    Ok(read
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .map(|entry| NormalizedPath::new(entry.path()))
        .collect())
}

fn collect_documents(
    dir: &NormalizedPath,
    environment: Option<&str>,
    entries: &mut Vec<StoredEntry>,
) -> Result<()> {
    let native = dir.to_native();
    let read = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;

    for entry in read.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match parse_file_name(&name) {
            Ok((project, version)) => entries.push(StoredEntry {
                address: Address::new(project, version, environment),
                path: NormalizedPath::new(&path),
            }),
            Err(_) => tracing::debug!(file = %name, "skipping file outside naming pattern"),
        }
    }
    Ok(())
}
