//! Blocking HTTP implementation of [`Remote`]

use std::cell::OnceCell;
use std::time::Duration;

use confsync_fs::NormalizedPath;
use confsync_meta::EndpointSettings;
use serde_json::Value;

use super::{ACTION_HEADER, AUTH_HEADER, ENV_HEADER, PublishRequest, Remote, TransferError};
use crate::Result;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("confsync/", env!("CARGO_PKG_VERSION"));

enum Endpoint {
    Ready(EndpointSettings),
    Deferred {
        path: NormalizedPath,
        loaded: OnceCell<EndpointSettings>,
    },
}

/// Talks to the configuration service over HTTP using the endpoint settings
/// of this invocation.
pub struct HttpRemote {
    endpoint: Endpoint,
    agent: ureq::Agent,
}

impl HttpRemote {
    pub fn new(settings: EndpointSettings) -> Self {
        Self::with_endpoint(Endpoint::Ready(settings))
    }

    /// Read the settings from `path` on the first request only.
    ///
    /// Operations that fail locally never need the settings file.
    pub fn from_settings_file(path: NormalizedPath) -> Self {
        Self::with_endpoint(Endpoint::Deferred {
            path,
            loaded: OnceCell::new(),
        })
    }

    fn with_endpoint(endpoint: Endpoint) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        Self { endpoint, agent }
    }

    pub fn settings(&self) -> Result<&EndpointSettings> {
        match &self.endpoint {
            Endpoint::Ready(settings) => Ok(settings),
            Endpoint::Deferred { path, loaded } => {
                if let Some(settings) = loaded.get() {
                    return Ok(settings);
                }
                let settings = EndpointSettings::load(path)?;
                tracing::debug!(path = %path, api = %settings.api, "loaded endpoint settings");
                Ok(loaded.get_or_init(|| settings))
            }
        }
    }

    fn url(&self, segments: &[&str]) -> Result<String> {
        let path: Vec<String> = segments.iter().map(|s| encode_segment(s)).collect();
        Ok(format!("{}/configs/{}", self.settings()?.api, path.join("/")))
    }

    fn request(
        &self,
        method: &str,
        url: &str,
        environment: Option<&str>,
    ) -> Result<ureq::Request> {
        let mut request = self
            .agent
            .request(method, url)
            .set("Accept", "application/json");
        if let Some(token) = &self.settings()?.token {
            request = request.set(AUTH_HEADER, token);
        }
        if let Some(env) = environment {
            request = request.set(ENV_HEADER, env);
        }
        Ok(request)
    }

    fn get_document(&self, url: &str, environment: Option<&str>) -> Result<Value> {
        tracing::debug!(url, ?environment, "GET");
        let response = self
            .request("GET", url, environment)?
            .call()
            .map_err(transfer_error)?;
        let status = response.status();
        let document = response.into_json::<Value>().map_err(|e| {
            TransferError::new(Some(status), format!("invalid JSON response: {}", e))
        })?;
        Ok(document)
    }
}

impl Remote for HttpRemote {
    fn fetch_latest(&self, project: &str, environment: Option<&str>) -> Result<Value> {
        self.get_document(&self.url(&[project, "latest"])?, environment)
    }

    fn fetch_version(
        &self,
        project: &str,
        version: &str,
        environment: Option<&str>,
    ) -> Result<Value> {
        self.get_document(&self.url(&[project, version])?, environment)
    }

    fn publish(&self, request: &PublishRequest<'_>) -> Result<u16> {
        let url = self.url(&[request.project])?;
        tracing::debug!(url = %url, action = %request.action, environment = ?request.environment, "POST");
        let response = self
            .request("POST", &url, request.environment)?
            .set(ACTION_HEADER, request.action.as_str())
            .set("Content-Type", "application/json")
            .send_string(request.body)
            .map_err(transfer_error)?;
        Ok(response.status())
    }
}

fn transfer_error(error: ureq::Error) -> TransferError {
    match error {
        ureq::Error::Status(code, response) => {
            let status_text = response.status_text().to_string();
            let body = response.into_string().unwrap_or_default();
            let message = if body.trim().is_empty() {
                status_text
            } else {
                body.trim().to_string()
            };
            TransferError::new(Some(code), message)
        }
        other => TransferError::new(None, other.to_string()),
    }
}

/// Percent-encode a URL path segment, keeping RFC 3986 unreserved characters.
fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
