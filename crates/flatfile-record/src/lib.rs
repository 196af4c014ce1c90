#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # flatfile-record
//!
//! Typed record model produced by fixed-width decoding.
//!
//! A [`Record`] is an ordered mapping from column name to a [`Value`]. Key
//! order follows the schema the record was decoded with, so serializing a
//! record reproduces the column layout of the source file.

/// Ordered column-name to value mapping for one decoded line.
pub mod record;
/// Tagged value type carried by each record field.
pub mod value;

pub use record::Record;
pub use value::Value;
