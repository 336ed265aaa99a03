//! Domain error types
//!
//! This module defines the error hierarchy for tierconf.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main tierconf error type
///
/// Every fallible operation in the crate surfaces one of these variants
/// synchronously to its caller. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A descriptor could not be located, read or deserialized
    #[error("Load configuration [{location}] failed: {cause}")]
    LoadFailure { location: String, cause: String },

    /// Lookup of a key that is not registered in the store
    #[error("Configuration key not found: {0}")]
    KeyNotFound(String),

    /// A typed accessor could not parse the stored value
    #[error("Configuration key {key} has value {value:?} which is not a valid {expected}")]
    TypeError {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// Strict substitution of a variable that is unset or empty
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// The process-wide default store was already set
    #[error("Default configuration is already initialized")]
    AlreadyInitialized,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors that don't fit the categories above
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ConfigError {
    /// Creates a load failure for `location`
    pub fn load_failure(location: impl Into<String>, cause: impl ToString) -> Self {
        ConfigError::LoadFailure {
            location: location.into(),
            cause: cause.to_string(),
        }
    }

    /// Creates a type error for the value stored under `key`
    pub fn type_error(key: impl Into<String>, value: impl Into<String>, expected: &'static str) -> Self {
        ConfigError::TypeError {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }
}
