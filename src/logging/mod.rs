//! Logging and observability
//!
//! The library only emits `tracing` events; installing a subscriber is up
//! to the application. The `tierconf` binary uses [`init_logging`].
//!
//! # Example
//!
//! ```no_run
//! use tierconf::logging::{init_logging, LoggingOptions};
//!
//! let _guard = init_logging("debug", &LoggingOptions::default())
//!     .expect("Failed to initialize logging");
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard, LoggingOptions};
