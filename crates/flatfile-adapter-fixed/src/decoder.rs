//! Fixed-width line decoder
//!
//! Widths count characters, not bytes, so a multi-byte character occupies
//! one position on the line.

use crate::coerce::coerce;
use crate::errors::DecodeError;
use crate::Result;
use flatfile_record::Record;
use flatfile_schema::Schema;
use tracing::trace;

/// Decodes lines against one schema
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthDecoder<'a> {
    schema: &'a Schema,
    total_width: usize,
}

impl<'a> FixedWidthDecoder<'a> {
    /// Create a decoder; the required line length is computed once here
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            total_width: schema.total_width(),
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Required length of every data line
    pub fn line_width(&self) -> usize {
        self.total_width
    }

    /// Decode one line (without its terminator) into a record
    pub fn decode(&self, line: &str) -> Result<Record> {
        let actual = line.chars().count();
        if actual != self.total_width {
            trace!(
                "Line width {} does not match schema width {}",
                actual, self.total_width
            );
            return Err(DecodeError::width_mismatch(self.total_width, actual));
        }

        let mut record = Record::with_capacity(self.schema.len());
        let mut rest = line;
        for column in self.schema {
            let split = rest
                .char_indices()
                .nth(column.width())
                .map_or(rest.len(), |(idx, _)| idx);
            let (field, tail) = rest.split_at(split);
            rest = tail;

            let value = coerce(field, column.column_type())
                .map_err(|e| DecodeError::coercion(column.name(), e))?;
            record.insert(column.name(), value);
        }

        Ok(record)
    }
}

/// Decode one line against `schema`
pub fn decode_line(line: &str, schema: &Schema) -> Result<Record> {
    FixedWidthDecoder::new(schema).decode(line)
}
