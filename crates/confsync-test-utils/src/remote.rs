//! In-memory remote with scripted responses.

use std::cell::RefCell;
use std::collections::HashMap;

use confsync_core::{Action, Error, PublishRequest, Remote, Result, TransferError};
use serde_json::Value;

/// A request observed by [`FakeRemote`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    FetchLatest {
        project: String,
        environment: Option<String>,
    },
    FetchVersion {
        project: String,
        version: String,
        environment: Option<String>,
    },
    Publish {
        project: String,
        body: String,
        action: Action,
        environment: Option<String>,
    },
}

/// Scripted stand-in for the configuration service.
///
/// Unknown projects or versions answer 404, publishes answer 201 unless
/// configured otherwise.
#[derive(Debug)]
pub struct FakeRemote {
    latest: HashMap<String, Value>,
    versions: HashMap<(String, String), Value>,
    publish_status: u16,
    failure: Option<TransferError>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl Default for FakeRemote {
    fn default() -> Self {
        Self {
            latest: HashMap::new(),
            versions: HashMap::new(),
            publish_status: 201,
            failure: None,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `document` as the latest version of `project`.
    pub fn with_latest(mut self, project: &str, document: Value) -> Self {
        self.latest.insert(project.to_string(), document);
        self
    }

    /// Serve `document` for `GET /configs/:project/:version`.
    pub fn with_version(mut self, project: &str, version: &str, document: Value) -> Self {
        self.versions
            .insert((project.to_string(), version.to_string()), document);
        self
    }

    /// Status code returned by successful publishes.
    pub fn with_publish_status(mut self, status: u16) -> Self {
        self.publish_status = status;
        self
    }

    /// Make every request fail with `error`.
    pub fn failing_with(mut self, error: TransferError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    fn record(&self, request: RecordedRequest) -> std::result::Result<(), TransferError> {
        self.requests.borrow_mut().push(request);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

fn not_found() -> Error {
    TransferError::new(Some(404), "Not Found").into()
}

impl Remote for FakeRemote {
    fn fetch_latest(&self, project: &str, environment: Option<&str>) -> Result<Value> {
        self.record(RecordedRequest::FetchLatest {
            project: project.to_string(),
            environment: environment.map(str::to_string),
        })?;
        self.latest.get(project).cloned().ok_or_else(not_found)
    }

    fn fetch_version(
        &self,
        project: &str,
        version: &str,
        environment: Option<&str>,
    ) -> Result<Value> {
        self.record(RecordedRequest::FetchVersion {
            project: project.to_string(),
            version: version.to_string(),
            environment: environment.map(str::to_string),
        })?;
        self.versions
            .get(&(project.to_string(), version.to_string()))
            .cloned()
            .ok_or_else(not_found)
    }

    fn publish(&self, request: &PublishRequest<'_>) -> Result<u16> {
        self.record(RecordedRequest::Publish {
            project: request.project.to_string(),
            body: request.body.to_string(),
            action: request.action,
            environment: request.environment.map(str::to_string),
        })?;
        Ok(self.publish_status)
    }
}
