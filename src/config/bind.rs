//! Populating plain structs from a store
//!
//! A [`FieldTable`] is a static list of `(key, setter)` pairs with a typed
//! parser per field. Keys absent from the store are skipped; values that do
//! not parse are reported as [`ConfigError::TypeError`](crate::domain::ConfigError::TypeError).
//!
//! ```
//! use tierconf::config::{ConfigStore, FieldTable};
//! use tierconf::domain::Record;
//!
//! #[derive(Default)]
//! struct Settings {
//!     cache_seconds: i32,
//!     debug: bool,
//! }
//!
//! let table = FieldTable::new()
//!     .int("CACHE_SECONDS", |s: &mut Settings, v| s.cache_seconds = v)
//!     .bool("DEBUG", |s: &mut Settings, v| s.debug = v);
//!
//! let store = ConfigStore::build(vec![Record::new("CACHE_SECONDS", "60")].into(), None);
//! let mut settings = Settings::default();
//! assert_eq!(table.populate(&mut settings, &store).unwrap(), 1);
//! assert_eq!(settings.cache_seconds, 60);
//! assert!(!settings.debug);
//! ```

use super::store::ConfigStore;
use crate::domain::Result;
use std::str::FromStr;

type Apply<T> = Box<dyn Fn(&mut T, &ConfigStore, &str) -> Result<()> + Send + Sync>;

struct Binding<T> {
    key: String,
    apply: Apply<T>,
}

/// Statically declared mapping from store keys to fields of `T`
pub struct FieldTable<T> {
    bindings: Vec<Binding<T>>,
}

impl<T> Default for FieldTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FieldTable<T> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    fn bind<F>(mut self, key: impl Into<String>, apply: F) -> Self
    where
        F: Fn(&mut T, &ConfigStore, &str) -> Result<()> + Send + Sync + 'static,
    {
        self.bindings.push(Binding {
            key: key.into(),
            apply: Box::new(apply),
        });
        self
    }

    pub fn string<S>(self, key: impl Into<String>, set: S) -> Self
    where
        S: Fn(&mut T, String) + Send + Sync + 'static,
    {
        self.bind(key, move |target, store, key| {
            set(target, store.get_string(key)?);
            Ok(())
        })
    }

    pub fn int<S>(self, key: impl Into<String>, set: S) -> Self
    where
        S: Fn(&mut T, i32) + Send + Sync + 'static,
    {
        self.bind(key, move |target, store, key| {
            set(target, store.get_int(key)?);
            Ok(())
        })
    }

    pub fn long<S>(self, key: impl Into<String>, set: S) -> Self
    where
        S: Fn(&mut T, i64) + Send + Sync + 'static,
    {
        self.bind(key, move |target, store, key| {
            set(target, store.get_long(key)?);
            Ok(())
        })
    }

    pub fn bool<S>(self, key: impl Into<String>, set: S) -> Self
    where
        S: Fn(&mut T, bool) + Send + Sync + 'static,
    {
        self.bind(key, move |target, store, key| {
            set(target, store.get_bool(key)?);
            Ok(())
        })
    }

    /// Binds a field of any [`FromStr`] type
    pub fn parsed<V, S>(self, key: impl Into<String>, set: S) -> Self
    where
        V: FromStr,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.bind(key, move |target, store, key| {
            set(target, store.get_parsed(key)?);
            Ok(())
        })
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|binding| binding.key.as_str())
    }

    /// Applies every binding whose key is present in `store`
    ///
    /// Returns the number of fields set. Stops at the first value that
    /// fails to parse.
    pub fn populate(&self, target: &mut T, store: &ConfigStore) -> Result<usize> {
        let mut applied = 0;
        for binding in &self.bindings {
            if !store.contains(&binding.key) {
                tracing::trace!(key = %binding.key, "No entry for bound field");
                continue;
            }
            (binding.apply)(target, store, &binding.key)?;
            applied += 1;
        }
        Ok(applied)
    }
}

/// Upper-snake store key for a field or accessor name
///
/// `cacheSeconds` and `CacheSeconds` both map to `CACHE_SECONDS`;
/// snake_case input is upper-cased unchanged.
pub fn field_key(field: &str) -> String {
    let mut key = String::with_capacity(field.len() + 8);
    for ch in field.chars() {
        if ch.is_uppercase() && !key.is_empty() && !key.ends_with('_') {
            key.push('_');
        }
        key.extend(ch.to_uppercase());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigError, Record, RecordList};
    use std::collections::HashMap;
    use std::net::Ipv4Addr;

    #[derive(Debug, Default, PartialEq)]
    struct ServerSettings {
        name: String,
        port: i32,
        max_bytes: i64,
        tls: bool,
        bind: Option<Ipv4Addr>,
    }

    fn table() -> FieldTable<ServerSettings> {
        FieldTable::new()
            .string(field_key("name"), |s: &mut ServerSettings, v| s.name = v)
            .int(field_key("port"), |s: &mut ServerSettings, v| s.port = v)
            .long(field_key("maxBytes"), |s: &mut ServerSettings, v| {
                s.max_bytes = v
            })
            .bool(field_key("tls"), |s: &mut ServerSettings, v| s.tls = v)
            .parsed(field_key("bind"), |s: &mut ServerSettings, v: Ipv4Addr| {
                s.bind = Some(v)
            })
    }

    fn store(pairs: &[(&str, &str)]) -> ConfigStore {
        let records: RecordList = pairs.iter().map(|(k, v)| Record::new(*k, *v)).collect();
        ConfigStore::build_with_env(records, None, &HashMap::<String, String>::new())
    }

    #[test]
    fn test_populate_all_fields() {
        let store = store(&[
            ("NAME", "edge"),
            ("PORT", "8080"),
            ("MAX_BYTES", "10000000000"),
            ("TLS", "true"),
            ("BIND", "10.0.0.1"),
        ]);
        let mut settings = ServerSettings::default();
        let applied = table().populate(&mut settings, &store).unwrap();

        assert_eq!(applied, 5);
        assert_eq!(
            settings,
            ServerSettings {
                name: "edge".to_string(),
                port: 8080,
                max_bytes: 10_000_000_000,
                tls: true,
                bind: Some(Ipv4Addr::new(10, 0, 0, 1)),
            }
        );
    }

    #[test]
    fn test_missing_keys_are_skipped() {
        let store = store(&[("PORT", "9000")]);
        let mut settings = ServerSettings::default();
        assert_eq!(table().populate(&mut settings, &store).unwrap(), 1);
        assert_eq!(settings.port, 9000);
        assert!(settings.name.is_empty());
    }

    #[test]
    fn test_bad_value_is_type_error() {
        let store = store(&[("PORT", "eighty")]);
        let mut settings = ServerSettings::default();
        let err = table().populate(&mut settings, &store).unwrap_err();
        assert!(matches!(err, ConfigError::TypeError { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn test_keys_in_declaration_order() {
        let table = table();
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["NAME", "PORT", "MAX_BYTES", "TLS", "BIND"]);
    }

    #[test]
    fn test_field_key() {
        assert_eq!(field_key("cacheSeconds"), "CACHE_SECONDS");
        assert_eq!(field_key("CacheSeconds"), "CACHE_SECONDS");
        assert_eq!(field_key("name"), "NAME");
        assert_eq!(field_key("max_bytes"), "MAX_BYTES");
        assert_eq!(field_key(""), "");
    }
}
