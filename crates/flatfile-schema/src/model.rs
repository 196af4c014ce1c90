//! Schema model definitions

use crate::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a fixed-width column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Text, trimmed of surrounding whitespace
    Str,
    /// `1` or `0`
    Bool,
    /// Base-10 signed 64-bit integer
    Int,
}

impl ColumnType {
    /// Descriptor token for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Str => "str",
            ColumnType::Bool => "bool",
            ColumnType::Int => "int",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "str" => Ok(ColumnType::Str),
            "bool" => Ok(ColumnType::Bool),
            "int" => Ok(ColumnType::Int),
            other => Err(SchemaError::UnsupportedType(other.to_string())),
        }
    }
}

/// One column definition from a descriptor row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    name: String,
    width: usize,
    #[serde(rename = "type")]
    column_type: ColumnType,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, width: usize, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            width,
            column_type,
        }
    }

    /// Output record key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Characters occupied on each data line
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }
}

/// Ordered column definitions.
///
/// Order fixes both the slicing offsets on a data line and the key order of
/// every decoded record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    /// Create a schema from columns in slicing order
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in schema order
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(ColumnSpec::name).collect()
    }

    /// Sum of all column widths, i.e. the required length of a data line
    pub fn total_width(&self) -> usize {
        self.columns.iter().map(ColumnSpec::width).sum()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<ColumnSpec> for Schema {
    fn from_iter<I: IntoIterator<Item = ColumnSpec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a ColumnSpec;
    type IntoIter = std::slice::Iter<'a, ColumnSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
