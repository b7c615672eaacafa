//! HttpRemote against a real local HTTP server.

use std::io::Read;
use std::sync::mpsc;
use std::thread;

use confsync_core::{Action, FailureKind, HttpRemote, PublishRequest, Remote, SyncEngine};
use confsync_fs::{LocalStore, NormalizedPath};
use confsync_meta::EndpointSettings;
use confsync_test_utils::RecordingReporter;
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

/// What the server saw for one request.
#[derive(Debug)]
struct Seen {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Seen {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Serve exactly one request with `status` and `body`, then stop.
fn serve_once(status: u16, body: &'static str) -> (String, mpsc::Receiver<Seen>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let addr = server.server_addr().to_ip().expect("ip listener");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut request = server.recv().expect("receive request");
        let mut content = String::new();
        request.as_reader().read_to_string(&mut content).ok();
        let seen = Seen {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers: request
                .headers()
                .iter()
                .map(|h| (h.field.to_string(), h.value.to_string()))
                .collect(),
            body: content,
        };
        let response = tiny_http::Response::from_string(body)
            .with_status_code(status)
            .with_header(
                "Content-Type: application/json"
                    .parse::<tiny_http::Header>()
                    .unwrap(),
            );
        request.respond(response).ok();
        tx.send(seen).ok();
    });

    (format!("http://{}", addr), rx)
}

fn remote(api: &str, token: Option<&str>) -> HttpRemote {
    HttpRemote::new(EndpointSettings::new(api, token.map(str::to_string)).unwrap())
}

#[test]
fn test_fetch_latest_sends_token_and_environment() {
    let (api, rx) = serve_once(
        200,
        r#"{"name":"atlas","version":"4.0.0","config":{"replicas":1}}"#,
    );

    let document = remote(&api, Some("t0ken"))
        .fetch_latest("atlas", Some("staging"))
        .unwrap();

    assert_eq!(
        document,
        json!({"name": "atlas", "version": "4.0.0", "config": {"replicas": 1}})
    );
    let seen = rx.recv().unwrap();
    assert_eq!(seen.method, "GET");
    assert_eq!(seen.url, "/configs/atlas/latest");
    assert_eq!(seen.header("X-Auth-Token"), Some("t0ken"));
    assert_eq!(seen.header("X-Environment"), Some("staging"));
}

#[test]
fn test_fetch_without_environment_omits_header() {
    let (api, rx) = serve_once(200, r#"{"name":"atlas","version":"1","config":{}}"#);

    remote(&api, None).fetch_version("atlas", "1", None).unwrap();

    let seen = rx.recv().unwrap();
    assert_eq!(seen.url, "/configs/atlas/1");
    assert_eq!(seen.header("X-Environment"), None);
    assert_eq!(seen.header("X-Auth-Token"), None);
}

#[test]
fn test_fetch_version_not_found() {
    let (api, _rx) = serve_once(404, r#""#);

    let err = remote(&api, None)
        .fetch_version("atlas", "9.9.9", None)
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::TransferFailed);
    assert_eq!(err.status(), Some(404));
}

#[test]
fn test_publish_sends_raw_body_and_action() {
    let (api, rx) = serve_once(201, r#"{"ok":true}"#);
    let body = r#"{"name":"atlas","version":"1.0.0","config":{}}"#;

    let status = remote(&api, Some("abc"))
        .publish(&PublishRequest {
            project: "atlas",
            body,
            action: Action::Revert,
            environment: Some("qa"),
        })
        .unwrap();

    assert_eq!(status, 201);
    let seen = rx.recv().unwrap();
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.url, "/configs/atlas");
    assert_eq!(seen.body, body);
    assert_eq!(seen.header("X-Action"), Some("revert"));
    assert_eq!(seen.header("X-Environment"), Some("qa"));
}

#[test]
fn test_publish_rejection_uses_response_body() {
    let (api, _rx) = serve_once(422, r#"{"error":"version exists"}"#);

    let err = remote(&api, None)
        .publish(&PublishRequest {
            project: "atlas",
            body: "{}",
            action: Action::Push,
            environment: None,
        })
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert!(err.to_string().contains("version exists"));
}

#[test]
fn test_connection_failure_has_no_status() {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    drop(server);

    let err = remote(&format!("http://{}", addr), None)
        .fetch_latest("atlas", None)
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::TransferFailed);
    assert_eq!(err.status(), None);
}

#[test]
fn test_push_checks_file_name_before_reading_settings() {
    let temp = TempDir::new().unwrap();
    let settings = NormalizedPath::new(temp.path()).join("missing/settings.json");
    let file = NormalizedPath::new(temp.path()).join("bad-config.json");
    std::fs::write(file.to_native(), r#"{"name":"atlas","version":"1","config":{}}"#).unwrap();
    let engine = SyncEngine::new(
        LocalStore::new(temp.path()),
        HttpRemote::from_settings_file(settings),
    );

    let err = engine
        .push(&file, None, &mut RecordingReporter::new())
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::InvalidFilenameFormat);
}

#[test]
fn test_revert_checks_local_file_before_reading_settings() {
    let temp = TempDir::new().unwrap();
    let settings = NormalizedPath::new(temp.path()).join("missing/settings.json");
    let engine = SyncEngine::new(
        LocalStore::new(temp.path()),
        HttpRemote::from_settings_file(settings),
    );

    let err = engine
        .revert("atlas", "1.0.0", None, |_| true, &mut RecordingReporter::new())
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::FileNotFound);
}

#[test]
fn test_missing_settings_surface_on_first_request() {
    let temp = TempDir::new().unwrap();
    let settings = NormalizedPath::new(temp.path()).join("settings.json");

    let err = HttpRemote::from_settings_file(settings)
        .fetch_latest("atlas", None)
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Local);
    assert!(err.to_string().contains("confsync init"));
}
