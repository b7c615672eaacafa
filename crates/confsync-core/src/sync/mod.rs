//! Synchronization operations
//!
//! Each operation is a single pass through resolve, transfer, validate and
//! persist/report. Nothing is retried; the first fatal failure ends the
//! operation and is handed to the [`Reporter`](crate::Reporter).

mod checkout;
mod engine;
mod pull;
mod push;
mod revert;

pub use engine::SyncEngine;
