use confsync_fs::Address;
use confsync_meta::Document;

use crate::remote::Remote;
use crate::report::{Operation, Reporter, SyncReport};
use crate::{Error, Result};

use super::engine::{SyncEngine, Warnings, finish, identity_mismatch};

impl<R: Remote> SyncEngine<R> {
    /// Fetch one exact version of `project` and store it locally.
    ///
    /// When the server answers with a different name or version the
    /// mismatch is reported as a warning and the returned document is stored
    /// under its own version. A 404 carries a hint that the version may not
    /// exist remotely; nothing is written in that case.
    pub fn checkout(
        &self,
        project: &str,
        version: &str,
        environment: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport> {
        let result = self.run_checkout(project, version, environment, reporter);
        finish(result, reporter)
    }

    fn run_checkout(
        &self,
        project: &str,
        version: &str,
        environment: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport> {
        Address::check_scope(project, environment)?;
        tracing::info!(project, version, ?environment, "checking out");
        let document = self
            .remote()
            .fetch_version(project, version, environment)
            .map_err(|e| match e {
                Error::TransferFailed {
                    status: Some(404),
                    message,
                    ..
                } => Error::TransferFailed {
                    status: Some(404),
                    message,
                    hint: Some(format!(
                        "version '{}' of '{}' may not exist on the remote",
                        version, project
                    )),
                },
                other => other,
            })?;

        let mut warnings = Warnings::new(reporter);
        if let Some(mismatch) = identity_mismatch(Document::identity(&document), project, Some(version)) {
            warnings.push(mismatch);
        }
        let (address, path) = self.persist_fetched(project, environment, &document, &mut warnings)?;

        Ok(SyncReport {
            operation: Operation::Checkout,
            address,
            path,
            status: None,
            warnings: warnings.into_inner(),
        })
    }
}
