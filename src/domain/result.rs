//! Result type alias for tierconf
//!
//! This module provides a convenient Result type alias that uses ConfigError
//! as the error type.

use super::errors::ConfigError;

/// Result type alias for tierconf operations
///
/// # Examples
///
/// ```
/// use tierconf::domain::result::Result;
/// use tierconf::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String> {
///     Ok("value".to_string())
/// }
///
/// fn failing_lookup() -> Result<()> {
///     Err(ConfigError::KeyNotFound("MISSING".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ConfigError>;
