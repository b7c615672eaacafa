//! Command implementations for confsync-cli

pub mod checkout;
pub mod diff;
pub mod env;
pub mod init;
pub mod list;
pub mod pull;
pub mod push;
pub mod revert;

pub use checkout::run_checkout;
pub use diff::run_diff;
pub use env::run_env;
pub use init::run_init;
pub use list::run_list;
pub use pull::run_pull;
pub use push::run_push;
pub use revert::run_revert;
