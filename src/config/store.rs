//! Immutable key → entry store with typed accessors

use crate::domain::{ConfigError, Entry, RecordList, Result};
use crate::env::{substitute_optional, EnvSource, ProcessEnv};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::str::FromStr;

/// Key of the data cache lifetime, in seconds
pub const CACHE_SECONDS: &str = "CACHE_SECONDS";

/// Resolved configuration
///
/// Built once from a base [`RecordList`] and an optional override list and
/// never mutated afterwards, so a store can be shared across threads
/// (e.g. behind an `Arc`) without locking.
///
/// Two stores are equal when they hold the same entries, wherever those
/// entries were read from.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    entries: HashMap<String, Entry>,
    sources: Vec<PathBuf>,
}

impl ConfigStore {
    /// Builds a store, resolving references against the process environment
    pub fn build(base: RecordList, overrides: Option<RecordList>) -> Self {
        Self::build_with_env(base, overrides, &ProcessEnv)
    }

    /// Builds a store, resolving references against `env`
    ///
    /// Every raw value is substituted then trimmed. Later records win over
    /// earlier ones with the same key, and override records are applied
    /// after all base records.
    pub fn build_with_env<E: EnvSource + ?Sized>(
        base: RecordList,
        overrides: Option<RecordList>,
        env: &E,
    ) -> Self {
        let mut entries = HashMap::with_capacity(base.len());
        insert_all(&mut entries, base, env);
        if let Some(overrides) = overrides {
            insert_all(&mut entries, overrides, env);
        }
        Self {
            entries,
            sources: Vec::new(),
        }
    }

    pub(crate) fn with_sources(mut self, sources: Vec<PathBuf>) -> Self {
        self.sources = sources;
        self
    }

    /// Descriptor files this store was loaded from, base first
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Full entry for `key`
    ///
    /// # Errors
    ///
    /// [`ConfigError::KeyNotFound`] if the key is not registered
    pub fn get_entry(&self, key: &str) -> Result<&Entry> {
        self.entries
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    /// Resolved value for `key`
    pub fn get(&self, key: &str) -> Result<&str> {
        self.get_entry(key).map(|entry| entry.value.as_str())
    }

    /// Owned copy of the value for `key`
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key).map(str::to_string)
    }

    pub fn get_int(&self, key: &str) -> Result<i32> {
        self.parse_as(key, "i32")
    }

    pub fn get_long(&self, key: &str) -> Result<i64> {
        self.parse_as(key, "i64")
    }

    /// Value for `key` as a boolean, `true` or `false` in any ASCII case
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        let value = self.get(key)?;
        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ConfigError::type_error(key, value, "bool"))
        }
    }

    /// Value for `key` parsed with `T`'s [`FromStr`] implementation
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Result<T> {
        self.parse_as(key, std::any::type_name::<T>())
    }

    /// Value for `key` read as an inline TOML document
    ///
    /// ```
    /// use serde::Deserialize;
    /// use tierconf::config::ConfigStore;
    /// use tierconf::domain::Record;
    ///
    /// #[derive(Deserialize)]
    /// struct Pool {
    ///     size: u32,
    /// }
    ///
    /// let store = ConfigStore::build(vec![Record::new("POOL", "size = 4")].into(), None);
    /// let pool: Pool = store.get_nested("POOL").unwrap();
    /// assert_eq!(pool.size, 4);
    /// ```
    pub fn get_nested<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.get(key)?;
        toml::from_str(value)
            .map_err(|_| ConfigError::type_error(key, value, std::any::type_name::<T>()))
    }

    /// Lifetime of cached data, read from [`CACHE_SECONDS`]
    pub fn cache_seconds(&self) -> Result<i32> {
        self.get_int(CACHE_SECONDS)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by key
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .collect::<BTreeMap<_, _>>()
            .into_values()
    }

    fn parse_as<T: FromStr>(&self, key: &str, expected: &'static str) -> Result<T> {
        let value = self.get(key)?;
        value
            .parse()
            .map_err(|_| ConfigError::type_error(key, value, expected))
    }
}

impl PartialEq for ConfigStore {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ConfigStore {}

fn insert_all<E: EnvSource + ?Sized>(
    entries: &mut HashMap<String, Entry>,
    records: RecordList,
    env: &E,
) {
    for record in records {
        let value = substitute_optional(&record.value, env).trim().to_string();
        tracing::debug!(key = %record.key, "Registered configuration entry");
        entries.insert(record.key.clone(), Entry::from_record(record, value));
    }
}
