//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade so the
//! rest of the engine never touches a concrete backend.

mod init;

pub use init::{LoggingConfig, init_logging};
