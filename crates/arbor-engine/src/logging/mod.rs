//! Logger initialization.
//!
//! Everything in the crate logs through the `log` facade; this module only
//! installs `env_logger` as the backend for binaries.

mod init;

pub use init::{LoggingConfig, init_logging};
