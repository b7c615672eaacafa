//! Schema validation for configuration documents
//!
//! The schema is fixed: an object with exactly the keys `name` (string),
//! `version` (string) and `config` (object, any content). Validation collects
//! every violation instead of stopping at the first one so callers can show
//! the whole list at once.

use std::fmt;

use confsync_fs::{Error as FsError, NormalizedPath, io};
use serde_json::Value;

const REQUIRED_FIELDS: [(&str, FieldType); 3] = [
    ("name", FieldType::String),
    ("version", FieldType::String),
    ("config", FieldType::Object),
];

#[derive(Debug, Clone, Copy)]
enum FieldType {
    String,
    Object,
}

impl FieldType {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Object => value.is_object(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Object => "object",
        }
    }
}

/// One schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// JSON pointer to the offending location; empty for the document root
    pub pointer: String,
    pub message: String,
}

impl ValidationIssue {
    fn root(message: impl Into<String>) -> Self {
        Self {
            pointer: String::new(),
            message: message.into(),
        }
    }

    fn at(field: &str, message: impl Into<String>) -> Self {
        Self {
            pointer: format!("/{}", field),
            message: message.into(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.pointer.is_empty()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = if self.is_root() { "(root)" } else { &self.pointer };
        write!(f, "{}: {}", location, self.message)
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate an already-parsed JSON value against the document schema.
pub fn validate_value(value: &Value) -> ValidationReport {
    let Some(object) = value.as_object() else {
        return ValidationReport {
            issues: vec![ValidationIssue::root("must be object")],
        };
    };

    let mut issues = Vec::new();

    for key in object.keys() {
        if !REQUIRED_FIELDS.iter().any(|(field, _)| field == key) {
            issues.push(ValidationIssue::root(format!(
                "must NOT have additional property '{}'",
                key
            )));
        }
    }

    for (field, _) in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            issues.push(ValidationIssue::root(format!(
                "must have required property '{}'",
                field
            )));
        }
    }

    for (field, expected) in REQUIRED_FIELDS {
        if let Some(found) = object.get(field)
            && !expected.matches(found)
        {
            issues.push(ValidationIssue::at(
                field,
                format!("must be {}", expected.name()),
            ));
        }
    }

    ValidationReport { issues }
}

/// Parse `text` as JSON and validate it.
///
/// Text that does not parse yields a single generic root issue.
pub fn validate_text(text: &str) -> ValidationReport {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => validate_value(&value),
        Err(_) => ValidationReport {
            issues: vec![ValidationIssue::root("document is not valid JSON")],
        },
    }
}

/// Read and validate the document stored at `path`.
///
/// A missing file is reported as a validation failure, not an error.
pub fn validate_file(path: &NormalizedPath) -> ValidationReport {
    let report = match io::read_text(path) {
        Ok(text) => validate_text(&text),
        Err(FsError::FileNotFound { .. }) => ValidationReport {
            issues: vec![ValidationIssue::root(format!(
                "file does not exist: {}",
                path
            ))],
        },
        Err(e) => ValidationReport {
            issues: vec![ValidationIssue::root(format!("file could not be read: {}", e))],
        },
    };
    tracing::debug!(path = %path, issues = report.issues.len(), "validated document");
    report
}
