//! Environment variable references inside configuration values
//!
//! Values may embed references in two forms, with names made of
//! upper-case ASCII letters and underscores:
//!
//! - bare: `$SERVER_HOME/conf`
//! - bracketed: `$[SERVER_HOME]_backup`
//!
//! [`scanner`] finds the references, [`substitute`] resolves them against an
//! [`EnvSource`]. Resolved values have `\` normalized to `/`.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use tierconf::env::substitute_optional;
//!
//! let env = HashMap::from([("FOO".to_string(), "bar".to_string())]);
//! assert_eq!(substitute_optional("$FOO/$[FOO]/$BAR", &env), "bar/bar/$BAR");
//! ```

pub mod scanner;
pub mod substitute;

use std::collections::{BTreeMap, HashMap};

pub use scanner::{scan, Token};
pub use substitute::{substitute_optional, substitute_required};

/// Source of environment variable values
///
/// Implementations return `None` for unset variables. Callers treat an
/// empty value the same as an unset one.
pub trait EnvSource {
    /// Looks up `name`
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Looks up `name`, treating an empty value as unset
pub(crate) fn lookup<E: EnvSource + ?Sized>(env: &E, name: &str) -> Option<String> {
    env.var(name).filter(|value| !value.is_empty())
}

/// Path-style normalization applied to every substituted value
pub(crate) fn normalize_value(value: &str) -> String {
    value.replace('\\', "/")
}
