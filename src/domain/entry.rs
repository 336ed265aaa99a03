//! Resolved configuration entries

use super::record::Record;
use serde::Serialize;

/// A configuration entry as stored in a [`ConfigStore`](crate::config::ConfigStore)
///
/// `value` has already been through environment substitution and trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub value: String,
}

impl Entry {
    /// Wraps a record whose value has already been resolved
    pub(crate) fn from_record(record: Record, value: String) -> Self {
        Self {
            key: record.key,
            name: record.name,
            kind: record.kind,
            description: record.description,
            value,
        }
    }
}
