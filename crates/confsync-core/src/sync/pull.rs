use confsync_fs::Address;
use confsync_meta::Document;

use crate::remote::Remote;
use crate::report::{Operation, Reporter, SyncReport};
use crate::Result;

use super::engine::{SyncEngine, Warnings, finish, identity_mismatch};

impl<R: Remote> SyncEngine<R> {
    /// Fetch the latest document for `project` and store it locally.
    ///
    /// The document is stored under the version the server returned. Schema
    /// problems and a differing embedded name are warnings; the file is kept.
    pub fn pull(
        &self,
        project: &str,
        environment: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport> {
        let result = self.run_pull(project, environment, reporter);
        finish(result, reporter)
    }

    fn run_pull(
        &self,
        project: &str,
        environment: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport> {
        Address::check_scope(project, environment)?;
        tracing::info!(project, ?environment, "pulling latest");
        let document = self.remote().fetch_latest(project, environment)?;

        let mut warnings = Warnings::new(reporter);
        if let Some(mismatch) = identity_mismatch(Document::identity(&document), project, None) {
            warnings.push(mismatch);
        }
        let (address, path) = self.persist_fetched(project, environment, &document, &mut warnings)?;

        Ok(SyncReport {
            operation: Operation::Pull,
            address,
            path,
            status: None,
            warnings: warnings.into_inner(),
        })
    }
}
