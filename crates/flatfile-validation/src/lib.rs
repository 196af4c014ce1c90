#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # flatfile-validation
//!
//! Filename contract checks for flat-file and descriptor pairs.
//!
//! A data file must be named `<format>_<YYYY-MM-DD>.txt` and its descriptor
//! `<format>.csv`. Only the last path segment of each name is inspected.
//!
//! ## Example Usage
//!
//! ```rust
//! use flatfile_validation::{validate_input, FilenameError};
//!
//! assert!(validate_input("data/orders_2021-06-03.txt", "specs/orders.csv").is_ok());
//!
//! let err = validate_input("data/orders_2021-06-03.txt", "specs/invoices.csv").unwrap_err();
//! assert!(matches!(err, FilenameError::FormatMismatch { .. }));
//! ```

pub mod config;
pub mod filename;

pub use config::FilenameConfig;
pub use filename::{
    FilenameValidator, check_date_format, check_date_token, format_tag, has_extension,
    last_segment, validate_input,
};

use thiserror::Error;

/// Filename contract violations, in the order they are checked
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilenameError {
    #[error("Expected {expected} file extension for {filename}")]
    DataExtension { filename: String, expected: String },

    #[error("Incorrect formatting on data file name {filename}, should be <format>_<date>{extension}")]
    MalformedDataName { filename: String, extension: String },

    #[error("Data file date '{token}' does not match the date format {format}")]
    DateFormat { token: String, format: String },

    #[error("Expected {expected} file extension for {filename}")]
    DescriptorExtension { filename: String, expected: String },

    #[error("Mismatching file formats between '{data_tag}' and '{descriptor_tag}'")]
    FormatMismatch {
        data_tag: String,
        descriptor_tag: String,
    },
}

impl FilenameError {
    /// Whether the error concerns the `_<date>` part of the data file name
    #[must_use]
    pub fn is_date_error(&self) -> bool {
        matches!(self, Self::MalformedDataName { .. } | Self::DateFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, FilenameError>;
