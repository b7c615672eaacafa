//! Synchronization core for confsync
//!
//! This crate moves configuration documents between the local store and the
//! remote service:
//!
//! - **pull**: fetch the latest version of a project and store it
//! - **push**: validate a local document and publish it
//! - **checkout**: fetch one exact version and store it
//! - **revert**: republish a stored version as the new latest
//!
//! # Architecture
//!
//! ```text
//!                  confsync-cli
//!                       |
//!                 confsync-core  ----  Remote (HTTP service)
//!                   |        |
//!          confsync-meta   confsync-fs
//! ```
//!
//! Operations never print. Warnings, successes and failures are delivered
//! through a [`Reporter`], and the revert confirmation is an injected
//! function, so every operation runs unattended under test.

pub mod error;
pub mod remote;
pub mod report;
pub mod sync;

pub use error::{Error, FailureKind, Result};
pub use remote::{Action, HttpRemote, PublishRequest, Remote, TransferError};
pub use report::{Operation, Reporter, SyncReport, Warning};
pub use sync::SyncEngine;
