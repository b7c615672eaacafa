//! Document fixtures.
//!
//! # Panics
//! The seeding helpers panic on I/O failure; they are meant for tests only.

use std::fs;
use std::path::{Path, PathBuf};

use confsync_fs::{Address, NormalizedPath};
use serde_json::{Value, json};

/// A schema-valid document with a small config payload.
pub fn document(name: &str, version: &str) -> Value {
    json!({
        "name": name,
        "version": version,
        "config": {
            "replicas": 2,
            "database": {"host": "db.internal", "port": 5432}
        }
    })
}

/// Write `value` to the canonical location of `address` under `root`.
pub fn write_document(root: &Path, address: &Address, value: &Value) -> PathBuf {
    let path = address.resolve(&NormalizedPath::new(root)).to_native();
    let text = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| panic!("write_document: failed to serialize: {e}"));
    write_raw(&path, &text);
    path
}

/// Write arbitrary text at `path`, creating parent directories.
pub fn write_raw(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("write_raw: failed to create {}: {e}", parent.display()));
    }
    fs::write(path, text)
        .unwrap_or_else(|e| panic!("write_raw: failed to write {}: {e}", path.display()));
}
