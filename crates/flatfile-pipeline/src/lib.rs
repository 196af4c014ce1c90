#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # flatfile-pipeline
//!
//! Flat-file parsing orchestration with partial acceptance of bad lines.
//!
//! [`FlatfileParser`] reads a data file and its descriptor, checks the
//! filename contract, loads the schema once and decodes every data line.
//! Fatal problems (unreadable files, filename contract violations, malformed
//! descriptors) abort the parse; lines that fail to decode are skipped and
//! reported as [`Notice`]s alongside the records that did decode.

pub mod parser;
pub mod policies;
pub mod report;
pub mod source;

pub use parser::{FlatfileParser, ParserConfig, parse_flatfile};
pub use policies::AcceptancePolicy;
pub use report::{Notice, ParseReport, ParseStats};
pub use source::{ContentSource, FsSource, MemorySource};

use flatfile_adapter_fixed::DecodeError;
use flatfile_schema::SchemaError;
use flatfile_validation::FilenameError;
use thiserror::Error;

/// Fatal parse errors. Any of these ends the parse with no records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("I/O error reading '{path}': {message}")]
    Io { path: String, message: String },

    #[error(transparent)]
    Filename(#[from] FilenameError),

    #[error("Malformed descriptor '{path}': {source}")]
    Schema {
        path: String,
        #[source]
        source: SchemaError,
    },

    #[error("Line {line} in data file: {source}")]
    Line {
        line: usize,
        #[source]
        source: DecodeError,
    },
}

impl Error {
    /// Create a structured I/O error naming the file that failed.
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-descriptor error naming the descriptor.
    pub fn schema(path: impl Into<String>, source: SchemaError) -> Self {
        Self::Schema {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
