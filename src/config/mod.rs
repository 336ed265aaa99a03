//! Configuration management for tierconf.
//!
//! # Overview
//!
//! Configuration comes from a base descriptor and an optional override
//! (server) descriptor whose location is itself a configuration value:
//!
//! - [`ConfigLoader`] - resolves, reads and merges descriptors
//! - [`ConfigStore`] - immutable resolved entries with typed accessors
//! - [`FieldTable`] - explicit key → field bindings for plain structs
//! - [`global`] - optional process-wide default store
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tierconf::config::ConfigLoader;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ConfigLoader::new().load("/appconfig.toml")?;
//!
//! let home = store.get("SERVER_HOME")?;
//! let cache = store.cache_seconds()?;
//! let debug = store.get_bool("DEBUG")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example Descriptor
//!
//! ```toml
//! [[param]]
//! key = "SERVER_CONFIG"
//! name = "Server configuration"
//! type = "path"
//! value = "$[SERVER_HOME]/server-config.toml"
//!
//! [[param]]
//! key = "CACHE_SECONDS"
//! type = "int"
//! value = "300"
//! ```
//!
//! Values may reference environment variables as `$NAME` or `$[NAME]`; see
//! [`crate::env`].

pub mod bind;
pub mod descriptor;
pub mod global;
pub mod loader;
pub mod resource;
pub mod store;

// Re-export commonly used types
pub use bind::{field_key, FieldTable};
pub use descriptor::{DescriptorFormat, DescriptorReader, JsonDescriptor, TomlDescriptor};
pub use loader::{ConfigLoader, SERVER_CONFIG};
pub use resource::{ResourceResolver, RESOURCES_DIR};
pub use store::{ConfigStore, CACHE_SECONDS};
