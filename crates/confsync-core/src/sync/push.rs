use confsync_fs::{Address, NormalizedPath};
use confsync_meta::validate_file;

use crate::remote::{Action, PublishRequest, Remote};
use crate::report::{Operation, Reporter, SyncReport};
use crate::{Error, Result};

use super::engine::{SyncEngine, finish};

impl<R: Remote> SyncEngine<R> {
    /// Publish a local document file.
    ///
    /// The project and version come from the file name. A malformed name,
    /// a missing file, or a schema violation stops the push before anything
    /// is sent.
    pub fn push(
        &self,
        file: &NormalizedPath,
        environment: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport> {
        let result = self.run_push(file, environment);
        finish(result, reporter)
    }

    fn run_push(&self, file: &NormalizedPath, environment: Option<&str>) -> Result<SyncReport> {
        let address = Address::from_path(file, environment)?;
        if !file.is_file() {
            return Err(Error::FileNotFound {
                path: file.to_native(),
            });
        }

        let validation = validate_file(file);
        if !validation.is_valid() {
            return Err(Error::SchemaValidationFailed {
                path: file.clone(),
                issues: validation.issues,
            });
        }

        let body = self.store().load_text(file)?;
        tracing::info!(%address, path = %file, "pushing");
        let status = self.remote().publish(&PublishRequest {
            project: &address.project,
            body: &body,
            action: Action::Push,
            environment,
        })?;

        Ok(SyncReport {
            operation: Operation::Push,
            address,
            path: file.clone(),
            status: Some(status),
            warnings: Vec::new(),
        })
    }
}
