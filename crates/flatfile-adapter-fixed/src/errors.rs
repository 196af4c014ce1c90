//! Error types for fixed-width decoding

use thiserror::Error;

/// A field's raw text could not be converted to its declared type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    #[error("Cannot convert '{raw}' to bool: expected \"1\" or \"0\"")]
    InvalidBool { raw: String },

    #[error("Cannot convert '{raw}' to int: {reason}")]
    InvalidInt { raw: String, reason: String },

    #[error("Unsupported column type: {0}")]
    UnsupportedType(String),
}

impl CoercionError {
    /// Raw field text that failed to convert
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::InvalidBool { raw } | Self::InvalidInt { raw, .. } => Some(raw),
            Self::UnsupportedType(_) => None,
        }
    }
}

/// A data line could not be decoded. No partial record is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Line length differs from the sum of column widths
    #[error("Improperly formatted line: expected {expected} characters, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    /// One field failed coercion, failing the whole line
    #[error("Conversion error in column '{column}': {source}")]
    Coercion {
        column: String,
        #[source]
        source: CoercionError,
    },
}

impl DecodeError {
    /// Create a width mismatch error
    pub fn width_mismatch(expected: usize, actual: usize) -> Self {
        Self::WidthMismatch { expected, actual }
    }

    /// Wrap a coercion failure with the column it happened in
    pub fn coercion(column: impl Into<String>, source: CoercionError) -> Self {
        Self::Coercion {
            column: column.into(),
            source,
        }
    }

    /// Column that failed, if the error is a coercion failure
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Coercion { column, .. } => Some(column),
            Self::WidthMismatch { .. } => None,
        }
    }
}
