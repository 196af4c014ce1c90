//! Ordered records
#![allow(clippy::must_use_candidate)] // Accessor API intentionally omits pervasive #[must_use].

use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One decoded line: column name to value, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with room for `capacity` fields
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a field, returning the previous value for that name.
    ///
    /// A repeated name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(name.into(), value)
    }

    /// Look up a field by column name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut record = Record::new();
        record.insert("name", Value::from("Foonyor"));
        record.insert("empty", Value::from(""));
        record.insert("valid", Value::Bool(true));

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "empty", "valid"]);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("valid"), Some(&Value::Bool(true)));
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn test_repeated_name_keeps_position() {
        let mut record = Record::new();
        record.insert("a", Value::Int(1));
        record.insert("b", Value::Int(2));
        let previous = record.insert("a", Value::Int(3));

        assert_eq!(previous, Some(Value::Int(1)));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let record: Record = [
            ("name", Value::from("Barzane")),
            ("valid", Value::Bool(false)),
            ("count", Value::Int(-12)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Barzane","valid":false,"count":-12}"#);
    }

    #[test]
    fn test_deserializes_from_object() {
        let record: Record =
            serde_json::from_str(r#"{"name":"Quuxitude","valid":true,"count":103}"#).unwrap();
        assert_eq!(record.get("count"), Some(&Value::Int(103)));
        assert_eq!(record.iter().count(), 3);
    }
}
