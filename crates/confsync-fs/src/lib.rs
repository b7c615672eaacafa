//! Filesystem layer for confsync
//!
//! Maps `(project, version, environment)` triples onto the on-disk store
//! layout and provides the load/save primitives built on top of it.

pub mod address;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod store;

pub use address::{Address, parse_file_name};
pub use constants::StorePath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use store::{LocalStore, StoredEntry};
