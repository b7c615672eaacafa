//! The configuration document
//!
//! ```json
//! {
//!   "name": "atlas",
//!   "version": "1.4.0",
//!   "config": { "replicas": 3 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A versioned configuration record, as decoded once it has passed
/// validation.
///
/// `config` is open: any JSON object is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub name: String,
    pub version: String,
    pub config: Map<String, Value>,
}

impl Document {
    /// Read the embedded `name` and `version` from an untyped document.
    ///
    /// Either half is `None` when absent or not a string.
    pub fn identity(value: &Value) -> (Option<&str>, Option<&str>) {
        (
            value.get("name").and_then(Value::as_str),
            value.get("version").and_then(Value::as_str),
        )
    }
}
