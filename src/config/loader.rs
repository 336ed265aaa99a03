//! Two-tier configuration loading
//!
//! Loading works in this order:
//! 1. Resolve the base descriptor through the [`ResourceResolver`] and read it
//! 2. Build a provisional store from the base records alone
//! 3. Look up [`SERVER_CONFIG`] in that store; if unset, return it as is
//! 4. If the path it names is missing or not a file, warn and return the
//!    base store
//! 5. Otherwise read the override descriptor and rebuild with both lists

use super::descriptor::{DescriptorFormat, DescriptorReader};
use super::resource::ResourceResolver;
use super::store::ConfigStore;
use crate::domain::{ConfigError, RecordList, Result};
use crate::env::{EnvSource, ProcessEnv};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Key whose value locates the override (server) descriptor
pub const SERVER_CONFIG: &str = "SERVER_CONFIG";

/// Loads a [`ConfigStore`] from a base descriptor and an optional override
///
/// # Examples
///
/// ```no_run
/// use tierconf::config::ConfigLoader;
///
/// let store = ConfigLoader::new()
///     .with_root("/opt/app")
///     .load("/appconfig.toml")
///     .expect("Failed to load config");
/// let port = store.get_int("HTTP_PORT").expect("HTTP_PORT");
/// ```
pub struct ConfigLoader {
    resolver: ResourceResolver,
    reader: Box<dyn DescriptorReader>,
    env: Arc<dyn EnvSource + Send + Sync>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl ConfigLoader {
    /// Loader rooted at the working directory, reading TOML and the process environment
    pub fn new() -> Self {
        Self {
            resolver: ResourceResolver::default(),
            reader: DescriptorFormat::Toml.reader(),
            env: Arc::new(ProcessEnv),
        }
    }

    /// Sets the directory resource locations are resolved against
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resolver = ResourceResolver::new(root);
        self
    }

    pub fn with_format(mut self, format: DescriptorFormat) -> Self {
        self.reader = format.reader();
        self
    }

    pub fn with_reader(mut self, reader: Box<dyn DescriptorReader>) -> Self {
        self.reader = reader;
        self
    }

    /// Sets the environment references are resolved against
    pub fn with_env(mut self, env: Arc<dyn EnvSource + Send + Sync>) -> Self {
        self.env = env;
        self
    }

    pub fn resolver(&self) -> &ResourceResolver {
        &self.resolver
    }

    /// Loads the base descriptor at `location` and merges the override it
    /// points to, if any
    ///
    /// # Errors
    ///
    /// [`ConfigError::LoadFailure`] if either descriptor cannot be read or
    /// parsed. A missing override key or file is not an error.
    pub fn load(&self, location: &str) -> Result<ConfigStore> {
        let (base_path, mut input) = self.resolver.open(location)?;
        let base = self.reader.read(&mut input, location)?;
        tracing::debug!(
            location = %location,
            path = %base_path.display(),
            records = base.len(),
            "Read base descriptor"
        );

        let provisional = ConfigStore::build_with_env(base.clone(), None, self.env.as_ref())
            .with_sources(vec![base_path.clone()]);

        let Some(server_path) = override_location(&provisional) else {
            tracing::info!(
                key = SERVER_CONFIG,
                location = %location,
                "Server config key not found, using base configuration only"
            );
            return Ok(provisional);
        };

        if !server_path.exists() {
            tracing::warn!(
                path = %server_path.display(),
                "Server config file does not exist, using base configuration only"
            );
            return Ok(provisional);
        }
        if !server_path.is_file() {
            tracing::warn!(
                path = %server_path.display(),
                "Server config path is not a file, skipped; using base configuration only"
            );
            return Ok(provisional);
        }

        let overrides = self.read_file(&server_path)?;
        tracing::info!(
            path = %server_path.display(),
            records = overrides.len(),
            "Merging server configuration"
        );

        Ok(
            ConfigStore::build_with_env(base, Some(overrides), self.env.as_ref())
                .with_sources(vec![base_path, server_path]),
        )
    }

    fn read_file(&self, path: &Path) -> Result<RecordList> {
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|e| ConfigError::load_failure(&origin, e))?;
        self.reader.read(&mut BufReader::new(file), &origin)
    }
}

/// Path named by [`SERVER_CONFIG`], if it holds any text
fn override_location(store: &ConfigStore) -> Option<PathBuf> {
    store
        .get(SERVER_CONFIG)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
