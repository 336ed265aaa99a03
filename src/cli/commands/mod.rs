//! CLI command implementations
//!
//! Commands return a process exit code: 0 on success, 2 for configuration
//! errors. Unexpected failures propagate as `anyhow` errors.

pub mod get;
pub mod init;
pub mod scan;
pub mod show;
pub mod validate;

/// Exit code for configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;
