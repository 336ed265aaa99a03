//! Descriptor deserialization
//!
//! A descriptor is a file listing `param` records. The store does not care
//! about the syntax; it only consumes the [`RecordList`] produced here.
//!
//! TOML (default):
//!
//! ```toml
//! [[param]]
//! key = "CACHE_SECONDS"
//! name = "Cache lifetime"
//! type = "int"
//! description = "Seconds before cached data expires"
//! value = "300"
//! ```
//!
//! JSON:
//!
//! ```json
//! { "param": [ { "key": "CACHE_SECONDS", "value": 300 } ] }
//! ```

use crate::domain::{ConfigError, Record, RecordList, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Turns a descriptor byte stream into records
pub trait DescriptorReader: Send + Sync {
    /// Reads every record from `input`; `origin` names the source in errors
    fn read(&self, input: &mut dyn Read, origin: &str) -> Result<RecordList>;
}

#[derive(Debug, Deserialize)]
struct Descriptor {
    #[serde(default, rename = "param")]
    params: Vec<Record>,
}

fn read_text(input: &mut dyn Read, origin: &str) -> Result<String> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|e| ConfigError::load_failure(origin, e))?;
    Ok(text)
}

/// `[[param]]` tables in a TOML document
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlDescriptor;

impl DescriptorReader for TomlDescriptor {
    fn read(&self, input: &mut dyn Read, origin: &str) -> Result<RecordList> {
        let text = read_text(input, origin)?;
        let descriptor: Descriptor =
            toml::from_str(&text).map_err(|e| ConfigError::load_failure(origin, e))?;
        Ok(descriptor.params.into())
    }
}

/// A `param` array in a JSON object
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDescriptor;

impl DescriptorReader for JsonDescriptor {
    fn read(&self, input: &mut dyn Read, origin: &str) -> Result<RecordList> {
        let descriptor: Descriptor =
            serde_json::from_reader(input).map_err(|e| ConfigError::load_failure(origin, e))?;
        Ok(descriptor.params.into())
    }
}

/// Supported descriptor syntaxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptorFormat {
    #[default]
    Toml,
    Json,
}

impl DescriptorFormat {
    /// Picks a format by file extension, TOML unless the extension is `json`
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DescriptorFormat::Json,
            _ => DescriptorFormat::Toml,
        }
    }

    pub fn reader(self) -> Box<dyn DescriptorReader> {
        match self {
            DescriptorFormat::Toml => Box::new(TomlDescriptor),
            DescriptorFormat::Json => Box::new(JsonDescriptor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_descriptor() {
        let text = r#"
[[param]]
key = "SERVER_CONFIG"
name = "Server config"
type = "path"
description = "Location of the server descriptor"
value = "$[SERVER_HOME]/server-config.toml"

[[param]]
key = "CACHE_SECONDS"
value = 300
"#;
        let records = TomlDescriptor
            .read(&mut text.as_bytes(), "appconfig.toml")
            .unwrap();
        let records: Vec<Record> = records.into_iter().collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "SERVER_CONFIG");
        assert_eq!(records[0].kind, "path");
        assert_eq!(records[0].value, "$[SERVER_HOME]/server-config.toml");
        assert_eq!(records[1].value, "300");
        assert!(records[1].name.is_empty());
    }

    #[test]
    fn test_toml_without_params_is_empty() {
        let records = TomlDescriptor.read(&mut "".as_bytes(), "empty.toml").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_toml_record_without_key_fails() {
        let text = "[[param]]\nvalue = \"x\"\n";
        let err = TomlDescriptor
            .read(&mut text.as_bytes(), "broken.toml")
            .unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailure { ref location, .. } if location == "broken.toml"));
    }

    #[test]
    fn test_json_descriptor() {
        let text = r#"{"param": [{"key": "A", "value": "1"}, {"key": "B", "value": false}]}"#;
        let records: Vec<Record> = JsonDescriptor
            .read(&mut text.as_bytes(), "a.json")
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(records[1].value, "false");
    }

    #[test]
    fn test_json_malformed_fails() {
        let err = JsonDescriptor
            .read(&mut "{".as_bytes(), "bad.json")
            .unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailure { .. }));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DescriptorFormat::from_path("a/b.json"), DescriptorFormat::Json);
        assert_eq!(DescriptorFormat::from_path("a/b.JSON"), DescriptorFormat::Json);
        assert_eq!(DescriptorFormat::from_path("a/b.toml"), DescriptorFormat::Toml);
        assert_eq!(DescriptorFormat::from_path("noext"), DescriptorFormat::Toml);
    }
}
