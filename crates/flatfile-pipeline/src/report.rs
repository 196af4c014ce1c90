//! Parse results and non-fatal notices
#![allow(clippy::must_use_candidate)] // Accessor API intentionally omits pervasive #[must_use].

use flatfile_adapter_fixed::DecodeError;
use flatfile_record::Record;
use flatfile_schema::SchemaWarning;
use std::fmt;

/// A non-fatal problem met while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A descriptor row was dropped or flagged by the schema loader
    Schema(SchemaWarning),

    /// A data line was skipped; `line` is 1-based
    SkippedLine { line: usize, error: DecodeError },
}

impl Notice {
    /// Line the notice refers to: descriptor line for schema notices,
    /// data line for skipped lines
    pub fn line(&self) -> usize {
        match self {
            Notice::Schema(warning) => warning.line(),
            Notice::SkippedLine { line, .. } => *line,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Schema(warning) => write!(f, "{warning}"),
            Notice::SkippedLine { line, error } => {
                write!(f, "Skipped line {line} in data file: {error}")
            }
        }
    }
}

/// Counters for one parse
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Data lines seen
    pub lines_read: usize,
    /// Lines decoded into records
    pub records_decoded: usize,
    /// Lines skipped because they failed to decode
    pub lines_skipped: usize,
    /// Descriptor warnings raised while loading the schema
    pub schema_warnings: usize,
}

/// Records decoded from one data file plus everything that was skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    records: Vec<Record>,
    notices: Vec<Notice>,
    stats: ParseStats,
}

impl ParseReport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_record(&mut self, record: Record) {
        self.stats.lines_read += 1;
        self.stats.records_decoded += 1;
        self.records.push(record);
    }

    pub(crate) fn push_skipped(&mut self, line: usize, error: DecodeError) {
        self.stats.lines_read += 1;
        self.stats.lines_skipped += 1;
        self.notices.push(Notice::SkippedLine { line, error });
    }

    pub(crate) fn push_schema_warning(&mut self, warning: SchemaWarning) {
        self.stats.schema_warnings += 1;
        self.notices.push(Notice::Schema(warning));
    }

    /// Decoded records in source line order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Notices in the order they were raised
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// 1-based numbers of the data lines that were skipped
    pub fn skipped_lines(&self) -> Vec<usize> {
        self.notices
            .iter()
            .filter_map(|notice| match notice {
                Notice::SkippedLine { line, .. } => Some(*line),
                Notice::Schema(_) => None,
            })
            .collect()
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Take the decoded records, dropping the notices
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatfile_record::Value;

    #[test]
    fn report_counts_records_and_skips() {
        let mut report = ParseReport::new();
        report.push_record([("a", Value::Int(1))].into_iter().collect());
        report.push_skipped(2, DecodeError::width_mismatch(3, 2));
        report.push_record([("a", Value::Int(3))].into_iter().collect());
        report.push_schema_warning(SchemaWarning::EmptyColumnName { line: 4 });

        let stats = report.stats();
        assert_eq!(stats.lines_read, 3);
        assert_eq!(stats.records_decoded, 2);
        assert_eq!(stats.lines_skipped, 1);
        assert_eq!(stats.schema_warnings, 1);
        assert_eq!(report.skipped_lines(), vec![2]);
        assert!(report.has_notices());
        assert_eq!(report.into_records().len(), 2);
    }

    #[test]
    fn notice_display_names_the_line() {
        let notice = Notice::SkippedLine {
            line: 2,
            error: DecodeError::width_mismatch(14, 13),
        };
        assert_eq!(notice.line(), 2);
        assert_eq!(
            notice.to_string(),
            "Skipped line 2 in data file: Improperly formatted line: expected 14 characters, got 13"
        );

        let notice = Notice::Schema(SchemaWarning::InvalidColumnType {
            line: 3,
            value: "float".to_string(),
        });
        assert_eq!(notice.line(), 3);
        assert!(notice.to_string().contains("float"));
    }
}
