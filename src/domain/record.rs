//! Raw descriptor records
//!
//! A [`Record`] is one `param` as it comes out of a descriptor, before any
//! environment substitution. A [`RecordList`] keeps them in file order.

use serde::{Deserialize, Deserializer, Serialize};

/// Raw `(key, value, metadata)` tuple produced by a descriptor reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Lookup identifier
    pub key: String,

    /// Unsubstituted value, may contain `$VAR` or `$[VAR]` references
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub value: String,

    /// Human readable name
    #[serde(default)]
    pub name: String,

    /// Declared type, informational only
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Free text description
    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Creates a record with empty metadata
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            name: String::new(),
            kind: String::new(),
            description: String::new(),
        }
    }

    /// Sets the human readable name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the declared type
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Ordered sequence of records from a single descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordList(Vec<Record>);

impl RecordList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a record
    pub fn push(&mut self, record: Record) {
        self.0.push(record);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no records
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the records in descriptor order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }
}

impl From<Vec<Record>> for RecordList {
    fn from(records: Vec<Record>) -> Self {
        Self(records)
    }
}

impl FromIterator<Record> for RecordList {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RecordList {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

/// Accepts any scalar and keeps its textual form
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Integer(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Boolean(b) => b.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = Record::new("CACHE_SECONDS", "30")
            .with_name("Cache")
            .with_kind("int")
            .with_description("Data cache time");

        assert_eq!(record.key, "CACHE_SECONDS");
        assert_eq!(record.value, "30");
        assert_eq!(record.name, "Cache");
        assert_eq!(record.kind, "int");
        assert_eq!(record.description, "Data cache time");
    }

    #[test]
    fn test_scalar_values_become_text() {
        let json = r#"[
            {"key": "A", "value": 30},
            {"key": "B", "value": true},
            {"key": "C", "value": 1.5},
            {"key": "D"}
        ]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        let values: Vec<&str> = records.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["30", "true", "1.5", ""]);
    }

    #[test]
    fn test_type_field_rename() {
        let record: Record =
            serde_json::from_str(r#"{"key": "A", "value": "x", "type": "string"}"#).unwrap();
        assert_eq!(record.kind, "string");
    }

    #[test]
    fn test_record_list_keeps_order() {
        let list: RecordList = vec![Record::new("B", "2"), Record::new("A", "1")].into();
        let keys: Vec<&str> = list.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
    }
}
