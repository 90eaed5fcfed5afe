//! Logging utilities.
//!
//! Every crate in the workspace logs through the `log` facade; this module owns the
//! one place where a backend (`env_logger`) is installed.

mod init;

pub use init::{init_logging, LoggingConfig};
