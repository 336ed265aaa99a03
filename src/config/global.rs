//! Process-wide default configuration
//!
//! Prefer building a [`ConfigStore`] with [`ConfigLoader`] and passing it
//! (or an `Arc` of it) to the code that needs it. This module exists for
//! call sites that need a global accessor.
//!
//! The default store is set at most once per process, either explicitly
//! with [`install`] or lazily on first access. Lazy initialization reads
//! [`BOOTSTRAP_PROPERTIES`] for a [`KEY_CONFIGFILE`] entry naming the base
//! descriptor, falling back to [`DEFAULT_CONFIGFILE`]. Once set the store is
//! never rebuilt; descriptor changes need a process restart.

use super::loader::ConfigLoader;
use super::store::ConfigStore;
use crate::domain::{ConfigError, Entry, Result};
use std::sync::{Mutex, OnceLock, PoisonError};

/// Bootstrap properties resource
pub const BOOTSTRAP_PROPERTIES: &str = "/appconfig.properties";

/// Bootstrap key naming the base descriptor
pub const KEY_CONFIGFILE: &str = "CONFIGFILE";

/// Base descriptor used when the bootstrap names none
pub const DEFAULT_CONFIGFILE: &str = "/appconfig.toml";

static DEFAULT: OnceLock<ConfigStore> = OnceLock::new();
static INIT: Mutex<()> = Mutex::new(());

/// Base descriptor location named by the bootstrap properties
pub fn descriptor_location(loader: &ConfigLoader) -> Result<String> {
    let properties = loader.resolver().read_properties(BOOTSTRAP_PROPERTIES)?;
    Ok(properties
        .get(KEY_CONFIGFILE)
        .filter(|location| !location.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONFIGFILE.to_string()))
}

/// Loads a store the way the default instance is loaded, without installing it
pub fn bootstrap(loader: &ConfigLoader) -> Result<ConfigStore> {
    let location = descriptor_location(loader)?;
    tracing::info!(location = %location, "Loading default configuration");
    loader.load(&location)
}

/// Sets the default store explicitly
///
/// # Errors
///
/// [`ConfigError::AlreadyInitialized`] if a default store already exists
pub fn install(store: ConfigStore) -> Result<&'static ConfigStore> {
    let _guard = INIT.lock().unwrap_or_else(PoisonError::into_inner);
    if DEFAULT.get().is_some() {
        return Err(ConfigError::AlreadyInitialized);
    }
    Ok(DEFAULT.get_or_init(|| store))
}

/// Returns the default store, bootstrapping it with `loader` on first use
///
/// Concurrent first callers block until a single build finishes. A failed
/// build leaves the default unset so a later call can try again.
pub fn init_with(loader: &ConfigLoader) -> Result<&'static ConfigStore> {
    if let Some(store) = DEFAULT.get() {
        return Ok(store);
    }

    let _guard = INIT.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(store) = DEFAULT.get() {
        return Ok(store);
    }
    let store = bootstrap(loader)?;
    Ok(DEFAULT.get_or_init(|| store))
}

/// Returns the default store, bootstrapping from the working directory on first use
pub fn default_store() -> Result<&'static ConfigStore> {
    match DEFAULT.get() {
        Some(store) => Ok(store),
        None => init_with(&ConfigLoader::new()),
    }
}

pub fn get(key: &str) -> Result<&'static str> {
    default_store()?.get(key)
}

pub fn get_int(key: &str) -> Result<i32> {
    default_store()?.get_int(key)
}

pub fn get_long(key: &str) -> Result<i64> {
    default_store()?.get_long(key)
}

pub fn get_bool(key: &str) -> Result<bool> {
    default_store()?.get_bool(key)
}

pub fn get_entry(key: &str) -> Result<&'static Entry> {
    default_store()?.get_entry(key)
}

pub fn cache_seconds() -> Result<i32> {
    default_store()?.cache_seconds()
}
