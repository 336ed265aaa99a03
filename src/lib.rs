// tierconf - Layered configuration with environment substitution
// Copyright (c) 2025 Tierconf Contributors
// Licensed under the MIT License

//! # tierconf
//!
//! tierconf loads key/value configuration entries from a base descriptor,
//! optionally overlays a second descriptor whose location is itself a
//! configuration value, and resolves environment variable references inside
//! values before exposing typed accessors.
//!
//! ## Architecture
//!
//! - [`env`] - `$NAME` / `$[NAME]` scanning and substitution
//! - [`config`] - store, loader, descriptor readers, field binding, default instance
//! - [`domain`] - records, entries and errors
//! - [`logging`] - structured logging setup for applications
//! - [`cli`] - command-line interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tierconf::config::ConfigLoader;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ConfigLoader::new()
//!         .with_root("/opt/app")
//!         .load("/appconfig.toml")?;
//!
//!     let cache_seconds = store.cache_seconds()?;
//!     let data_dir = store.get("DATA_DIR")?;
//!     println!("{data_dir} ({cache_seconds}s cache)");
//!     Ok(())
//! }
//! ```
//!
//! ## Override Descriptor
//!
//! When the base descriptor defines [`config::SERVER_CONFIG`] and the path it
//! names is an existing file, that file is read as well and its entries
//! replace base entries with the same key. A missing key or file falls back
//! to the base configuration.
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`] with a
//! [`domain::ConfigError`]. Lookups never fall back to defaults:
//!
//! ```rust
//! use tierconf::config::ConfigStore;
//! use tierconf::domain::{ConfigError, Record};
//!
//! let store = ConfigStore::build(vec![Record::new("PORT", "eighty")].into(), None);
//! assert!(matches!(store.get_int("PORT"), Err(ConfigError::TypeError { .. })));
//! assert!(matches!(store.get("HOST"), Err(ConfigError::KeyNotFound(_))));
//! ```
//!
//! ## Logging
//!
//! The library emits `tracing` events (override lookups, skipped files,
//! registered keys) and leaves subscriber setup to the application.

pub mod cli;
pub mod config;
pub mod domain;
pub mod env;
pub mod logging;
