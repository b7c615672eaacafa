//! SyncEngine and the pieces shared by every operation

use confsync_fs::{Address, LocalStore, NormalizedPath};
use confsync_meta::{Document, validate_file};
use serde_json::Value;

use crate::remote::Remote;
use crate::report::{Reporter, SyncReport, Warning};
use crate::{Error, Result};

/// Coordinates the local store, the schema validator and a [`Remote`].
pub struct SyncEngine<R: Remote> {
    store: LocalStore,
    remote: R,
}

impl<R: Remote> SyncEngine<R> {
    pub fn new(store: LocalStore, remote: R) -> Self {
        Self { store, remote }
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Persist a document received from the remote and check it.
    ///
    /// The address is built from the version the server returned, under the
    /// requested project and environment. A version that would place the file
    /// outside `<root>/<project>/` is refused before anything is written. An
    /// invalid document is still kept; the problems are raised as a
    /// [`Warning::SchemaInvalid`].
    pub(super) fn persist_fetched(
        &self,
        project: &str,
        environment: Option<&str>,
        document: &Value,
        warnings: &mut Warnings<'_>,
    ) -> Result<(Address, NormalizedPath)> {
        let (_, version) = Document::identity(document);
        let version = version.ok_or_else(|| Error::TransferFailed {
            status: None,
            message: format!(
                "response for '{}' has no string `version` field; cannot choose where to store it",
                project
            ),
            hint: None,
        })?;

        let address = Address::new(project, version, environment);
        address.check().map_err(|e| Error::TransferFailed {
            status: None,
            message: format!("unaddressable version '{}' returned for '{}': {}", version, project, e),
            hint: None,
        })?;
        let path = self.store.save(&address, document)?;

        let report = validate_file(&path);
        if !report.is_valid() {
            warnings.push(Warning::SchemaInvalid {
                path: path.clone(),
                issues: report.issues,
            });
        }
        Ok((address, path))
    }
}

/// Warnings raised so far, forwarded to the reporter as they happen.
pub(super) struct Warnings<'r> {
    reporter: &'r mut dyn Reporter,
    collected: Vec<Warning>,
}

impl<'r> Warnings<'r> {
    pub(super) fn new(reporter: &'r mut dyn Reporter) -> Self {
        Self {
            reporter,
            collected: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, warning: Warning) {
        tracing::warn!(%warning, "sync warning");
        self.reporter.on_warn(&warning);
        self.collected.push(warning);
    }

    pub(super) fn into_inner(self) -> Vec<Warning> {
        self.collected
    }
}

/// Compare a document's embedded `(name, version)` against the requested one.
///
/// `requested_version` of `None` means "latest", where only the name is
/// checked.
pub(super) fn identity_mismatch(
    found: (Option<&str>, Option<&str>),
    requested_name: &str,
    requested_version: Option<&str>,
) -> Option<Warning> {
    let (found_name, found_version) = found;
    let name_matches = found_name == Some(requested_name);
    let version_matches = requested_version.is_none_or(|v| found_version == Some(v));
    if name_matches && version_matches {
        return None;
    }
    Some(Warning::NameVersionMismatch {
        requested_name: requested_name.to_string(),
        requested_version: requested_version.map(str::to_string),
        found_name: found_name.map(str::to_string),
        found_version: found_version.map(str::to_string),
    })
}

/// Deliver the final outcome to the reporter and hand it back.
pub(super) fn finish(result: Result<SyncReport>, reporter: &mut dyn Reporter) -> Result<SyncReport> {
    match &result {
        Ok(report) => reporter.on_success(report),
        Err(error) => {
            tracing::error!(%error, kind = ?error.kind(), "sync failed");
            reporter.on_fail(error);
        }
    }
    result
}
