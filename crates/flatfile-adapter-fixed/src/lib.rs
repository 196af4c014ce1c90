//! # flatfile-adapter-fixed
//!
//! Fixed-width line decoding and type coercion.
//!
//! Each data line is sliced left to right by the column widths of a
//! [`Schema`](flatfile_schema::Schema) and every slice is coerced to its
//! declared type.
//!
//! ## Example Usage
//!
//! ```rust
//! use flatfile_adapter_fixed::decode_line;
//! use flatfile_record::Value;
//! use flatfile_schema::{ColumnSpec, ColumnType, Schema};
//!
//! let schema = Schema::new(vec![
//!     ColumnSpec::new("name", 10, ColumnType::Str),
//!     ColumnSpec::new("valid", 1, ColumnType::Bool),
//!     ColumnSpec::new("count", 3, ColumnType::Int),
//! ]);
//!
//! let record = decode_line("Barzane   0-12", &schema).unwrap();
//! assert_eq!(record.get("name"), Some(&Value::from("Barzane")));
//! assert_eq!(record.get("valid"), Some(&Value::Bool(false)));
//! assert_eq!(record.get("count"), Some(&Value::Int(-12)));
//! ```

pub mod coerce;
pub mod decoder;
pub mod errors;

pub use coerce::{coerce, coerce_token};
pub use decoder::{FixedWidthDecoder, decode_line};
pub use errors::{CoercionError, DecodeError};

pub type Result<T> = std::result::Result<T, DecodeError>;
