//! Document schema and endpoint settings for confsync.
//!
//! This crate defines the three-field configuration document, the validator
//! that enforces its schema, the persisted endpoint settings record, and a
//! structural diff between two documents.

pub mod diff;
pub mod document;
pub mod error;
pub mod settings;
pub mod validation;

pub use diff::{DocumentChange, DocumentDiff};
pub use document::Document;
pub use error::{Error, Result};
pub use settings::EndpointSettings;
pub use validation::{ValidationIssue, ValidationReport, validate_file, validate_text, validate_value};
