//! Resource lookup under a search root
//!
//! Locations are written root-relative (`/appconfig.toml`). A location is
//! looked up directly under the root first, then under its `resources`
//! subdirectory.

use crate::domain::{ConfigError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Fallback directory searched when a resource is not found under the root
pub const RESOURCES_DIR: &str = "resources";

/// Resolves resource locations against a search root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceResolver {
    root: PathBuf,
}

impl Default for ResourceResolver {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ResourceResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate paths for `location`, in search order
    pub fn candidates(&self, location: &str) -> [PathBuf; 2] {
        let relative = location.trim_start_matches(['/', '\\']);
        [
            self.root.join(relative),
            self.root.join(RESOURCES_DIR).join(relative),
        ]
    }

    /// First existing file for `location`
    pub fn resolve(&self, location: &str) -> Option<PathBuf> {
        self.candidates(location)
            .into_iter()
            .find(|candidate| candidate.is_file())
    }

    /// Opens `location`
    ///
    /// # Errors
    ///
    /// [`ConfigError::LoadFailure`] if no candidate exists or it cannot be opened
    pub fn open(&self, location: &str) -> Result<(PathBuf, BufReader<File>)> {
        let path = self.resolve(location).ok_or_else(|| {
            ConfigError::load_failure(
                location,
                format!("resource not found under {}", self.root.display()),
            )
        })?;
        let file = File::open(&path).map_err(|e| ConfigError::load_failure(location, e))?;
        Ok((path, BufReader::new(file)))
    }

    /// Reads `location` as `KEY=VALUE` lines
    ///
    /// A missing resource yields an empty map rather than an error.
    pub fn read_properties(&self, location: &str) -> Result<HashMap<String, String>> {
        let Some(path) = self.resolve(location) else {
            return Ok(HashMap::new());
        };

        let iter = dotenvy::from_path_iter(&path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        iter.map(|item| item.map_err(|e| ConfigError::Io(format!("{}: {e}", path.display()))))
            .collect()
    }
}
