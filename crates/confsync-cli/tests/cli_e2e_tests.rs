//! End-to-end tests that run the compiled `confsync` binary.

use std::fs;
use std::net::TcpListener;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the confsync binary, isolated in `dir`.
fn confsync(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("confsync").expect("Failed to find confsync binary");
    cmd.current_dir(dir)
        .env_remove("CONFSYNC_ROOT")
        .env("CONFSYNC_SETTINGS", dir.join("settings.json"));
    cmd
}

/// Point the settings file at `api`.
fn write_settings(dir: &Path, api: &str) {
    fs::write(
        dir.join("settings.json"),
        format!(r#"{{"api": "{}", "token": "secret"}}"#, api),
    )
    .unwrap();
}

/// An address nothing listens on.
fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Serve one request, reporting its url and headers.
fn serve_once(status: u16, body: &'static str) -> (String, mpsc::Receiver<(String, Vec<String>)>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let seen = (
                request.url().to_string(),
                request
                    .headers()
                    .iter()
                    .map(|h| format!("{}: {}", h.field, h.value))
                    .collect(),
            );
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            request.respond(response).ok();
            tx.send(seen).ok();
        }
    });
    (format!("http://{}", addr), rx)
}

fn write_doc(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

// ============================================================================
// General
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    confsync(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pull"))
        .stdout(predicate::str::contains("checkout"))
        .stdout(predicate::str::contains("revert"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    confsync(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("confsync"));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    confsync(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("confsync --help"));
}

#[test]
fn test_sync_without_settings_suggests_init() {
    let temp = TempDir::new().unwrap();
    confsync(temp.path())
        .args(["pull", "atlas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confsync init"));
}

// ============================================================================
// init / env / list / diff
// ============================================================================

#[test]
fn test_init_writes_settings() {
    let temp = TempDir::new().unwrap();
    confsync(temp.path())
        .args(["init", "--api", "https://configs.example.com/", "--token", "abc"])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("settings.json")).unwrap())
            .unwrap();
    assert_eq!(written["api"], "https://configs.example.com");
    assert_eq!(written["token"], "abc");
}

#[test]
fn test_init_rejects_non_http_url() {
    let temp = TempDir::new().unwrap();
    confsync(temp.path())
        .args(["init", "--api", "ftp://configs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
    assert!(!temp.path().join("settings.json").exists());
}

#[test]
fn test_env_scaffolds_folder() {
    let temp = TempDir::new().unwrap();
    confsync(temp.path())
        .args(["env", "atlas", "staging"])
        .assert()
        .success();
    assert!(temp.path().join("configs/atlas/env/staging").is_dir());
}

#[test]
fn test_list_groups_documents() {
    let temp = TempDir::new().unwrap();
    let doc = r#"{"name":"atlas","version":"1.0.0","config":{}}"#;
    write_doc(temp.path(), "configs/atlas/atlas@1.0.0.json", doc);
    write_doc(temp.path(), "configs/atlas/env/staging/atlas@2.0.0.json", doc);
    write_doc(temp.path(), "configs/atlas/notes.json", "{}");

    confsync(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("atlas"))
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("staging"))
        .stdout(predicate::str::contains("2 document(s)"));
}

#[test]
fn test_list_json_output() {
    let temp = TempDir::new().unwrap();
    let doc = r#"{"name":"atlas","version":"1.0.0","config":{}}"#;
    write_doc(temp.path(), "configs/atlas/atlas@1.0.0.json", doc);
    write_doc(temp.path(), "configs/beacon/beacon@3.json", doc);

    let output = confsync(temp.path())
        .args(["list", "atlas", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["project"], "atlas");
    assert_eq!(listed[0]["version"], "1.0.0");
    assert!(listed[0]["environment"].is_null());
}

#[test]
fn test_diff_reports_changed_paths() {
    let temp = TempDir::new().unwrap();
    write_doc(
        temp.path(),
        "a.json",
        r#"{"name":"atlas","version":"1","config":{"db":{"host":"a"}}}"#,
    );
    write_doc(
        temp.path(),
        "b.json",
        r#"{"name":"atlas","version":"2","config":{"db":{"host":"b"},"debug":true}}"#,
    );

    confsync(temp.path())
        .args(["diff", "a.json", "b.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.db.host"))
        .stdout(predicate::str::contains("config.debug"))
        .stdout(predicate::str::contains("version"));
}

// ============================================================================
// Sync operations
// ============================================================================

#[test]
fn test_push_bad_filename_fails_before_network() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), &closed_endpoint());
    write_doc(
        temp.path(),
        "bad-config.json",
        r#"{"name":"atlas","version":"1","config":{}}"#,
    );

    confsync(temp.path())
        .args(["push", "bad-config.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid filename format"));
}

#[test]
fn test_push_bad_filename_reported_without_settings() {
    let temp = TempDir::new().unwrap();
    write_doc(
        temp.path(),
        "bad-config.json",
        r#"{"name":"atlas","version":"1","config":{}}"#,
    );

    confsync(temp.path())
        .args(["push", "bad-config.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filename format"))
        .stderr(predicate::str::contains("confsync init").not());
}

#[test]
fn test_revert_missing_file_reported_without_settings() {
    let temp = TempDir::new().unwrap();

    confsync(temp.path())
        .args(["revert", "atlas", "1.0.0", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("confsync init").not());
}

#[test]
fn test_pull_rejects_project_with_path_separator() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), &closed_endpoint());

    confsync(temp.path())
        .args(["pull", "../atlas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project"));
    assert!(!temp.path().join("configs").exists());
}

#[test]
fn test_push_invalid_document_lists_issues() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), &closed_endpoint());
    write_doc(temp.path(), "atlas@1.json", r#"{"name":"atlas","extra":1}"#);

    confsync(temp.path())
        .args(["push", "atlas@1.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schema validation failed"))
        .stderr(predicate::str::contains("must have required property 'version'"))
        .stderr(predicate::str::contains("must NOT have additional property 'extra'"));
}

#[test]
fn test_push_sends_environment_and_action() {
    let temp = TempDir::new().unwrap();
    let (api, seen) = serve_once(201, "{}");
    write_settings(temp.path(), &api);
    write_doc(
        temp.path(),
        "atlas@1.0.0.json",
        r#"{"name":"atlas","version":"1.0.0","config":{}}"#,
    );

    confsync(temp.path())
        .args(["push", "atlas@1.0.0.json", "--env", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTTP 201"));

    let (url, headers) = seen.recv().unwrap();
    assert_eq!(url, "/configs/atlas");
    assert!(headers.iter().any(|h| h.eq_ignore_ascii_case("X-Environment: staging")));
    assert!(headers.iter().any(|h| h.eq_ignore_ascii_case("X-Action: push")));
}

#[test]
fn test_checkout_missing_version_hints_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let (api, seen) = serve_once(404, r#"{"error":"not found"}"#);
    write_settings(temp.path(), &api);

    confsync(temp.path())
        .args(["checkout", "atlas", "9.9.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 404"))
        .stderr(predicate::str::contains("may not exist on the remote"));

    let (url, _) = seen.recv().unwrap();
    assert_eq!(url, "/configs/atlas/9.9.9");
    assert!(!temp.path().join("configs/atlas/atlas@9.9.9.json").exists());
}

#[test]
fn test_pull_into_environment() {
    let temp = TempDir::new().unwrap();
    let (api, _seen) = serve_once(200, r#"{"name":"atlas","version":"1.4.0","config":{"a":1}}"#);
    write_settings(temp.path(), &api);

    confsync(temp.path())
        .args(["pull", "atlas", "--env", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("atlas@1.4.0"));

    assert!(
        temp.path()
            .join("configs/atlas/env/staging/atlas@1.4.0.json")
            .is_file()
    );
    assert!(!temp.path().join("configs/atlas/atlas@1.4.0.json").exists());
}

#[test]
fn test_revert_mismatch_without_terminal_is_declined() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), &closed_endpoint());
    write_doc(
        temp.path(),
        "configs/atlas/atlas@1.0.0.json",
        r#"{"name":"atlas","version":"1.0.1","config":{}}"#,
    );

    confsync(temp.path())
        .args(["revert", "atlas", "1.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1.0.1"))
        .stderr(predicate::str::contains("cancelled"));
}

#[test]
fn test_revert_missing_file_never_fetches() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), &closed_endpoint());

    confsync(temp.path())
        .args(["revert", "atlas", "1.0.0", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
