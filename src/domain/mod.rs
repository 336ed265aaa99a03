//! Domain models and types for tierconf.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Raw records** ([`Record`], [`RecordList`]) as produced by descriptor readers
//! - **Resolved entries** ([`Entry`]) as held by a configuration store
//! - **Error types** ([`ConfigError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ConfigError>`]:
//!
//! ```rust
//! use tierconf::domain::{ConfigError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(ConfigError::KeyNotFound("SERVER_CONFIG".to_string()))
//! }
//! ```

pub mod entry;
pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use entry::Entry;
pub use errors::ConfigError;
pub use record::{Record, RecordList};
pub use result::Result;
