//! # flatfile-schema
//!
//! Column descriptor model and loader for fixed-width flat files.
//!
//! A descriptor is a small comma-separated file. Its header row names the
//! three descriptor columns (`"column name"`, `width`, `datatype`) in any
//! order, and every following row defines one column of the data file:
//!
//! ```text
//! "column name",width,datatype
//! name,10,str
//! valid,1,bool
//! count,3,int
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use flatfile_schema::{ColumnType, SchemaLoader};
//!
//! let descriptor = "\"column name\",width,datatype\nname,10,str\nvalid,1,bool\n";
//! let (schema, warnings) = SchemaLoader::new().load_str(descriptor).unwrap();
//!
//! assert!(warnings.is_empty());
//! assert_eq!(schema.total_width(), 11);
//! assert_eq!(schema.columns()[1].column_type(), ColumnType::Bool);
//! ```

pub mod loader;
pub mod model;

pub use loader::{SchemaLoader, SchemaWarning, load_schema};
pub use model::{ColumnSpec, ColumnType, Schema};

use thiserror::Error;

/// Fatal descriptor problems. Loading stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Descriptor is empty: expected a header row")]
    EmptyDescriptor,

    #[error("Descriptor header is missing required column {token}")]
    MissingHeaderToken { token: String },

    #[error("Descriptor line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Descriptor line {line}: width '{value}' is not a non-negative integer")]
    InvalidWidth { line: usize, value: String },

    #[error("Unsupported column type: {0}")]
    UnsupportedType(String),

    #[error("Descriptor read error: {0}")]
    Read(String),
}

impl SchemaError {
    /// Descriptor line the error refers to, if any
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::FieldCount { line, .. } | Self::InvalidWidth { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<csv::Error> for SchemaError {
    fn from(e: csv::Error) -> Self {
        Self::Read(e.to_string())
    }
}

impl From<std::io::Error> for SchemaError {
    fn from(e: std::io::Error) -> Self {
        Self::Read(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line_numbers() {
        let err = SchemaError::FieldCount {
            line: 4,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.line_number(), Some(4));
        assert!(err.to_string().contains("expected 3 fields, found 2"));

        assert_eq!(SchemaError::EmptyDescriptor.line_number(), None);
    }

    #[test]
    fn test_missing_token_message() {
        let err = SchemaError::MissingHeaderToken {
            token: "width".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Descriptor header is missing required column width"
        );
    }
}
