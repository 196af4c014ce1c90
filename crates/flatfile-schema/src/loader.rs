//! Descriptor loader
//!
//! Reads descriptor content row by row. The header row decides which field
//! of every later row carries the column name, width and datatype; those
//! three positions are resolved once and reused for every row.

use crate::model::{ColumnSpec, ColumnType, Schema};
use crate::{Result, SchemaError};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use tracing::{debug, trace, warn};

/// Header token naming the column-name field, as written by upstream tools
pub const NAME_TOKEN: &str = "\"column name\"";
/// Header token naming the width field
pub const WIDTH_TOKEN: &str = "width";
/// Header token naming the datatype field
pub const DATATYPE_TOKEN: &str = "datatype";

/// Every descriptor row, header included, has exactly this many fields
const FIELD_COUNT: usize = 3;

/// Non-fatal descriptor problems. The offending row is left out of the schema
/// unless noted otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaWarning {
    /// Datatype is not one of `str`, `bool`, `int`
    InvalidColumnType { line: usize, value: String },
    /// Name is empty after trimming
    EmptyColumnName { line: usize },
    /// Name repeats an earlier column. The column is kept so slicing offsets
    /// stay correct, but its value replaces the earlier one in each record.
    DuplicateColumnName { line: usize, name: String },
}

impl SchemaWarning {
    /// 1-based descriptor line the warning refers to
    pub fn line(&self) -> usize {
        match self {
            SchemaWarning::InvalidColumnType { line, .. }
            | SchemaWarning::EmptyColumnName { line }
            | SchemaWarning::DuplicateColumnName { line, .. } => *line,
        }
    }
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaWarning::InvalidColumnType { line, value } => {
                write!(f, "Invalid type '{}' in line {} in descriptor", value, line)
            }
            SchemaWarning::EmptyColumnName { line } => {
                write!(f, "Empty column name in line {} in descriptor", line)
            }
            SchemaWarning::DuplicateColumnName { line, name } => {
                write!(f, "Duplicate column '{}' in line {} in descriptor", name, line)
            }
        }
    }
}

/// Field positions resolved from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderLayout {
    name: usize,
    width: usize,
    datatype: usize,
}

impl HeaderLayout {
    fn from_header(fields: &[String]) -> Result<Self> {
        let position = |token: &str| {
            fields
                .iter()
                .position(|field| is_header_token(field, token))
                .ok_or_else(|| SchemaError::MissingHeaderToken {
                    token: token.to_string(),
                })
        };

        Ok(Self {
            name: position(NAME_TOKEN)?,
            width: position(WIDTH_TOKEN)?,
            datatype: position(DATATYPE_TOKEN)?,
        })
    }
}

fn is_header_token(field: &str, token: &str) -> bool {
    let field = field.trim_start_matches('\u{feff}');
    field == token || (token == NAME_TOKEN && field == token.trim_matches('"'))
}

/// Builds a [`Schema`] from descriptor content
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    delimiter: u8,
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl SchemaLoader {
    /// Create a loader for comma-separated descriptors
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a schema from the full descriptor text
    pub fn load_str(&self, content: &str) -> Result<(Schema, Vec<SchemaWarning>)> {
        self.load_reader(content.as_bytes())
    }

    /// Load a schema from any reader producing descriptor text
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<(Schema, Vec<SchemaWarning>)> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let rows = csv_reader
            .records()
            .map(|record| -> Result<(usize, Vec<String>)> {
                let record = record?;
                let line = record
                    .position()
                    .map_or(0, |p| usize::try_from(p.line()).unwrap_or(usize::MAX));
                let fields = record
                    .iter()
                    .map(|field| field.trim().to_string())
                    .collect::<Vec<_>>();
                Ok((line, fields))
            });

        build_schema(rows)
    }

    /// Load a schema from descriptor lines, header first
    pub fn load_lines<I, S>(&self, lines: I) -> Result<(Schema, Vec<SchemaWarning>)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let delimiter = char::from(self.delimiter);
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| -> Result<(usize, Vec<String>)> {
                let fields = line
                    .as_ref()
                    .trim_end_matches(['\r', '\n'])
                    .split(delimiter)
                    .map(|field| field.trim().to_string())
                    .collect::<Vec<_>>();
                Ok((idx + 1, fields))
            });

        build_schema(rows)
    }
}

fn build_schema<I>(rows: I) -> Result<(Schema, Vec<SchemaWarning>)>
where
    I: Iterator<Item = Result<(usize, Vec<String>)>>,
{
    let mut rows = rows.filter(|row| !matches!(row, Ok((_, fields)) if is_blank(fields)));

    let (header_line, header) = rows.next().ok_or(SchemaError::EmptyDescriptor)??;
    check_field_count(header_line, &header)?;
    let layout = HeaderLayout::from_header(&header)?;
    trace!("Descriptor header layout: {:?}", layout);

    let mut columns = Vec::new();
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for row in rows {
        let (line, fields) = row?;
        check_field_count(line, &fields)?;

        let name = fields[layout.name].as_str();
        let width_raw = fields[layout.width].as_str();
        let width = width_raw
            .parse::<usize>()
            .map_err(|_| SchemaError::InvalidWidth {
                line,
                value: width_raw.to_string(),
            })?;

        let type_raw = fields[layout.datatype].as_str();
        let Ok(column_type) = type_raw.parse::<ColumnType>() else {
            push_warning(
                &mut warnings,
                SchemaWarning::InvalidColumnType {
                    line,
                    value: type_raw.to_string(),
                },
            );
            continue;
        };

        if name.is_empty() {
            push_warning(&mut warnings, SchemaWarning::EmptyColumnName { line });
            continue;
        }

        if !seen.insert(name.to_string()) {
            push_warning(
                &mut warnings,
                SchemaWarning::DuplicateColumnName {
                    line,
                    name: name.to_string(),
                },
            );
        }

        columns.push(ColumnSpec::new(name, width, column_type));
    }

    let schema = Schema::new(columns);
    debug!(
        "Loaded schema with {} columns, total width {}, {} warnings",
        schema.len(),
        schema.total_width(),
        warnings.len()
    );

    Ok((schema, warnings))
}

/// Load a schema from descriptor lines with the default loader
pub fn load_schema<I, S>(descriptor_lines: I) -> Result<(Schema, Vec<SchemaWarning>)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SchemaLoader::new().load_lines(descriptor_lines)
}

fn is_blank(fields: &[String]) -> bool {
    fields.len() == 1 && fields[0].is_empty()
}

fn check_field_count(line: usize, fields: &[String]) -> Result<()> {
    if fields.len() != FIELD_COUNT {
        return Err(SchemaError::FieldCount {
            line,
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }
    Ok(())
}

fn push_warning(warnings: &mut Vec<SchemaWarning>, warning: SchemaWarning) {
    warn!("{}", warning);
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "\"column name\",width,datatype\n\
                             name,10,str\n\
                             valid,1,bool\n\
                             count,3,int\n";

    fn expected_schema() -> Schema {
        Schema::new(vec![
            ColumnSpec::new("name", 10, ColumnType::Str),
            ColumnSpec::new("valid", 1, ColumnType::Bool),
            ColumnSpec::new("count", 3, ColumnType::Int),
        ])
    }

    #[test]
    fn test_load_canonical_descriptor() {
        let (schema, warnings) = SchemaLoader::new().load_str(CANONICAL).unwrap();
        assert_eq!(schema, expected_schema());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_permuted_header_yields_same_schema() {
        let permuted = "datatype , \"column name\" , width\n\
                        str,name,10\n\
                        bool,valid,1\n\
                        int,count,3\n";
        let (schema, _) = SchemaLoader::new().load_str(permuted).unwrap();
        assert_eq!(schema, expected_schema());

        let (from_lines, _) = load_schema(permuted.lines()).unwrap();
        assert_eq!(from_lines, expected_schema());
    }

    #[test]
    fn test_unquoted_name_token_is_accepted() {
        let descriptor = "column name,width,datatype\nname,10,str\n";
        let (schema, _) = SchemaLoader::new().load_str(descriptor).unwrap();
        assert_eq!(schema.names(), vec!["name"]);
    }

    #[test]
    fn test_whitespace_around_fields_is_trimmed() {
        let descriptor = "  \"column name\" ,  width,datatype  \r\n  name , 10 ,  str \r\n";
        let (schema, _) = SchemaLoader::new().load_str(descriptor).unwrap();
        assert_eq!(schema.columns()[0], ColumnSpec::new("name", 10, ColumnType::Str));
    }

    #[test]
    fn test_zero_width_column_is_valid() {
        let descriptor = "\"column name\",width,datatype\nname,10,str\nempty,0,str\nvalid,1,bool\n";
        let (schema, warnings) = SchemaLoader::new().load_str(descriptor).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(schema.columns()[1].width(), 0);
        assert_eq!(schema.total_width(), 11);
    }

    #[test]
    fn test_invalid_type_is_skipped_with_warning() {
        let descriptor = "\"column name\",width,datatype\n\
                          name,10,str\n\
                          ratio,5,float\n\
                          count,3,int\n";
        let (schema, warnings) = SchemaLoader::new().load_str(descriptor).unwrap();

        assert_eq!(schema.names(), vec!["name", "count"]);
        assert_eq!(
            warnings,
            vec![SchemaWarning::InvalidColumnType {
                line: 3,
                value: "float".to_string()
            }]
        );
        assert_eq!(warnings[0].line(), 3);
        assert!(warnings[0].to_string().contains("line 3"));
    }

    #[test]
    fn test_missing_header_token_is_fatal() {
        let descriptor = "name,width,datatype\nname,10,str\n";
        let err = SchemaLoader::new().load_str(descriptor).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingHeaderToken {
                token: NAME_TOKEN.to_string()
            }
        );
    }

    #[test]
    fn test_wrong_field_count_is_fatal() {
        let descriptor = "\"column name\",width,datatype\nname,10,str\nvalid,1\ncount,3,int\n";
        let err = SchemaLoader::new().load_str(descriptor).unwrap_err();
        assert_eq!(
            err,
            SchemaError::FieldCount {
                line: 3,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_header_field_count_is_checked() {
        let descriptor = "\"column name\",width,datatype,notes\nname,10,str\n";
        let err = SchemaLoader::new().load_str(descriptor).unwrap_err();
        assert_eq!(err.line_number(), Some(1));
    }

    #[test]
    fn test_non_numeric_width_is_fatal() {
        for width in ["ten", "-1", "1.5", ""] {
            let descriptor = format!("\"column name\",width,datatype\nname,{width},str\n");
            let err = SchemaLoader::new().load_str(&descriptor).unwrap_err();
            assert_eq!(
                err,
                SchemaError::InvalidWidth {
                    line: 2,
                    value: width.to_string()
                }
            );
        }
    }

    #[test]
    fn test_empty_descriptor_is_fatal() {
        assert_eq!(
            SchemaLoader::new().load_str("").unwrap_err(),
            SchemaError::EmptyDescriptor
        );
        assert_eq!(
            load_schema(Vec::<String>::new()).unwrap_err(),
            SchemaError::EmptyDescriptor
        );
    }

    #[test]
    fn test_header_only_yields_empty_schema() {
        let (schema, warnings) = SchemaLoader::new()
            .load_str("\"column name\",width,datatype\n")
            .unwrap();
        assert!(schema.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let descriptor = "\"column name\",width,datatype\n\nname,10,str\n   \nvalid,1,bool\n";
        let (schema, _) = SchemaLoader::new().load_str(descriptor).unwrap();
        assert_eq!(schema.names(), vec!["name", "valid"]);

        let (from_lines, _) = load_schema(descriptor.lines()).unwrap();
        assert_eq!(from_lines, schema);
    }

    #[test]
    fn test_empty_name_and_duplicates_warn() {
        let descriptor = "\"column name\",width,datatype\n\
                          ,2,str\n\
                          code,2,str\n\
                          code,3,int\n";
        let (schema, warnings) = SchemaLoader::new().load_str(descriptor).unwrap();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.total_width(), 5);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], SchemaWarning::EmptyColumnName { line: 2 });
        assert_eq!(
            warnings[1],
            SchemaWarning::DuplicateColumnName {
                line: 4,
                name: "code".to_string()
            }
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let descriptor = "\"column name\";width;datatype\nname;4;str\n";
        let (schema, _) = SchemaLoader::new()
            .with_delimiter(b';')
            .load_str(descriptor)
            .unwrap();
        assert_eq!(schema.total_width(), 4);
    }

    #[test]
    fn test_unicode_padding_trimmed_by_every_entry_point() {
        let descriptor = "\"column name\",width,datatype\n\u{3000}name\u{a0},\u{2003}10,str\u{3000}\n";
        let (from_str, warnings) = SchemaLoader::new().load_str(descriptor).unwrap();
        let (from_lines, _) = load_schema(descriptor.lines()).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(from_str, from_lines);
        assert_eq!(
            from_str,
            Schema::new(vec![ColumnSpec::new("name", 10, ColumnType::Str)])
        );
    }
}
