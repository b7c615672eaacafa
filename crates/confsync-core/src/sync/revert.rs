use confsync_fs::Address;
use confsync_meta::{Document, validate_file};

use crate::remote::{Action, PublishRequest, Remote};
use crate::report::{Operation, Reporter, SyncReport};
use crate::{Error, Result};

use super::engine::{SyncEngine, Warnings, finish, identity_mismatch};

impl<R: Remote> SyncEngine<R> {
    /// Republish a locally stored version as the new latest.
    ///
    /// Revert works only from the local store and never fetches first. If
    /// the stored document's embedded name or version disagrees with the
    /// request, `confirm` is asked whether to continue; a `false` answer
    /// aborts without any network call.
    pub fn revert<F>(
        &self,
        project: &str,
        version: &str,
        environment: Option<&str>,
        confirm: F,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport>
    where
        F: FnOnce(&str) -> bool,
    {
        let result = self.run_revert(project, version, environment, confirm, reporter);
        finish(result, reporter)
    }

    fn run_revert<F>(
        &self,
        project: &str,
        version: &str,
        environment: Option<&str>,
        confirm: F,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport>
    where
        F: FnOnce(&str) -> bool,
    {
        let address = Address::new(project, version, environment);
        address.check()?;
        let path = self.store().path_for(&address);
        if !path.is_file() {
            return Err(Error::FileNotFound {
                path: path.to_native(),
            });
        }

        let validation = validate_file(&path);
        if !validation.is_valid() {
            return Err(Error::SchemaValidationFailed {
                path,
                issues: validation.issues,
            });
        }

        let document: Document =
            serde_json::from_value(self.store().load(&path)?).map_err(|e| {
                Error::Local(confsync_fs::Error::ConfigParse {
                    path: path.to_native(),
                    message: e.to_string(),
                })
            })?;
        let found = (Some(document.name.as_str()), Some(document.version.as_str()));
        let mut warnings = Warnings::new(reporter);
        if let Some(mismatch) = identity_mismatch(found, project, Some(version)) {
            let prompt = format!("{}. Revert {} anyway?", mismatch, address);
            warnings.push(mismatch);
            if !confirm(&prompt) {
                tracing::info!(%address, "revert declined");
                return Err(Error::RevertDeclined {
                    address: address.to_string(),
                });
            }
        }

        let body = self.store().load_text(&path)?;
        tracing::info!(%address, path = %path, "reverting");
        let status = self.remote().publish(&PublishRequest {
            project,
            body: &body,
            action: Action::Revert,
            environment,
        })?;

        Ok(SyncReport {
            operation: Operation::Revert,
            address,
            path,
            status: Some(status),
            warnings: warnings.into_inner(),
        })
    }
}
