//! Flat-file parser orchestration
//!
//! One parse reads both files, checks the filename contract, loads the
//! schema once and then decodes the data file line by line.

use std::path::Path;

use flatfile_adapter_fixed::FixedWidthDecoder;
use flatfile_record::Record;
use flatfile_schema::SchemaLoader;
use flatfile_validation::{FilenameConfig, FilenameValidator};
use tracing::{debug, info, warn};

use crate::{AcceptancePolicy, ContentSource, Error, FsSource, ParseReport, Result};

/// Configuration for the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Filename contract for the data/descriptor pair
    pub filenames: FilenameConfig,
    /// What to do with lines that fail to decode
    pub policy: AcceptancePolicy,
    /// Whether to enforce the filename contract at all
    pub validate_filenames: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            filenames: FilenameConfig::default(),
            policy: AcceptancePolicy::default(),
            validate_filenames: true,
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filenames(mut self, filenames: FilenameConfig) -> Self {
        self.filenames = filenames;
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: AcceptancePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Skip the filename contract, e.g. for content that did not come from
    /// named files
    #[must_use]
    pub fn without_filename_validation(mut self) -> Self {
        self.validate_filenames = false;
        self
    }
}

/// Parses data files against their descriptors
#[derive(Debug, Clone, Default)]
pub struct FlatfileParser<S = FsSource> {
    source: S,
    config: ParserConfig,
}

impl FlatfileParser<FsSource> {
    /// Create a parser reading from the filesystem with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(FsSource)
    }
}

impl<S: ContentSource> FlatfileParser<S> {
    /// Create a parser reading from `source`
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            config: ParserConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `data_filename` against `descriptor_filename`.
    ///
    /// # Errors
    ///
    /// Fails without producing records when either file cannot be read,
    /// the filename contract is violated, the descriptor is malformed, or
    /// (under [`AcceptancePolicy::FailFast`]) a data line fails to decode.
    pub fn parse(&self, data_filename: &str, descriptor_filename: &str) -> Result<ParseReport> {
        let descriptor = self.read(descriptor_filename)?;
        let data = self.read(data_filename)?;

        if self.config.validate_filenames {
            FilenameValidator::with_config(self.config.filenames.clone())
                .validate(data_filename, descriptor_filename)?;
        }

        let report = self.parse_content_named(&data, &descriptor, descriptor_filename)?;
        let stats = report.stats();
        info!(
            "Parsed {data_filename}: {} records, {} lines skipped, {} schema warnings",
            stats.records_decoded, stats.lines_skipped, stats.schema_warnings
        );
        Ok(report)
    }

    /// Parse already-loaded content. No filename contract applies.
    ///
    /// # Errors
    ///
    /// Fails when the descriptor is malformed or, under
    /// [`AcceptancePolicy::FailFast`], when a data line fails to decode.
    pub fn parse_content(&self, data: &str, descriptor: &str) -> Result<ParseReport> {
        self.parse_content_named(data, descriptor, "<descriptor>")
    }

    fn parse_content_named(
        &self,
        data: &str,
        descriptor: &str,
        descriptor_name: &str,
    ) -> Result<ParseReport> {
        let (schema, warnings) = SchemaLoader::new()
            .load_str(descriptor)
            .map_err(|e| Error::schema(descriptor_name, e))?;

        let mut report = ParseReport::new();
        for warning in warnings {
            report.push_schema_warning(warning);
        }

        let decoder = FixedWidthDecoder::new(&schema);
        debug!(
            "Decoding with {} columns, line width {}",
            schema.len(),
            decoder.line_width()
        );

        let data = data.strip_prefix('\u{feff}').unwrap_or(data);
        for (idx, line) in data.lines().enumerate() {
            let line_number = idx + 1;
            let line = line.trim_end_matches(['\r', '\n']);
            match decoder.decode(line) {
                Ok(record) => report.push_record(record),
                Err(error) => match self.config.policy {
                    AcceptancePolicy::SkipInvalid => {
                        warn!("Skipping line {line_number} in data file: {error}");
                        report.push_skipped(line_number, error);
                    }
                    AcceptancePolicy::FailFast => {
                        return Err(Error::Line {
                            line: line_number,
                            source: error,
                        });
                    }
                },
            }
        }

        Ok(report)
    }

    fn read(&self, filename: &str) -> Result<String> {
        debug!("Reading {filename}");
        self.source
            .read_to_string(Path::new(filename))
            .map_err(|e| Error::io(filename, e.to_string()))
    }
}

/// Parse a data file against its descriptor from the filesystem and return
/// the decoded records. Skipped lines are logged, not returned.
///
/// # Errors
///
/// See [`FlatfileParser::parse`].
pub fn parse_flatfile(data_filename: &str, descriptor_filename: &str) -> Result<Vec<Record>> {
    FlatfileParser::new()
        .parse(data_filename, descriptor_filename)
        .map(ParseReport::into_records)
}
