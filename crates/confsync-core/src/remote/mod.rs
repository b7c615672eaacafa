//! Boundary to the remote configuration service
//!
//! The service exposes three endpoints:
//!
//! ```text
//! GET  /configs/:project/latest     -> {name, version, config}
//! GET  /configs/:project/:version   -> {name, version, config} | 404
//! POST /configs/:project            <- {name, version, config}
//! ```

mod http;

pub use http::HttpRemote;

use std::fmt;

use serde_json::Value;

use crate::Result;

/// Header carrying the authentication token
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Header scoping a request to an environment; the server assumes
/// production when it is absent
pub const ENV_HEADER: &str = "X-Environment";

/// Header telling the server why a document is being published
pub const ACTION_HEADER: &str = "X-Action";

/// Intent of a publish request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Push,
    Revert,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Revert => "revert",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document to publish, sent exactly as stored locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishRequest<'a> {
    pub project: &'a str,
    pub body: &'a str,
    pub action: Action,
    pub environment: Option<&'a str>,
}

/// Failure talking to the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferError {
    /// HTTP status, when the server answered at all
    pub status: Option<u16>,
    pub message: String,
}

impl TransferError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {}: {}", status, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl From<TransferError> for crate::Error {
    fn from(error: TransferError) -> Self {
        Self::TransferFailed {
            status: error.status,
            message: error.message,
            hint: None,
        }
    }
}

/// Operations the sync engine needs from the remote service.
///
/// Every call is a single blocking attempt; implementations must not retry.
/// Failures are usually [`Error::TransferFailed`](crate::Error::TransferFailed),
/// built from a [`TransferError`].
pub trait Remote {
    /// Fetch whatever the server currently considers the latest document.
    fn fetch_latest(&self, project: &str, environment: Option<&str>) -> Result<Value>;

    /// Fetch one exact version.
    fn fetch_version(
        &self,
        project: &str,
        version: &str,
        environment: Option<&str>,
    ) -> Result<Value>;

    /// Publish a document, returning the status code of the accepted request.
    fn publish(&self, request: &PublishRequest<'_>) -> Result<u16>;
}
