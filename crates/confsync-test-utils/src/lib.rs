//! Shared test utilities for the confsync workspace.
//!
//! - [`remote`]: a scripted in-memory [`Remote`](confsync_core::Remote) that
//!   records every request it receives
//! - [`reporter`]: a [`Reporter`](confsync_core::Reporter) that keeps every
//!   event for later assertions
//! - [`fixtures`]: document builders and store seeding helpers

pub mod fixtures;
pub mod remote;
pub mod reporter;

pub use fixtures::{document, write_document, write_raw};
pub use remote::{FakeRemote, RecordedRequest};
pub use reporter::{RecordingReporter, ReportEvent};
