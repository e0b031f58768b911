//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only uses the `log` facade;
//! the binary decides when to install `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
