//! Filename contract validation
//!
//! Rules run in a fixed order and the first failure is reported:
//! data extension, `<format>_<date>` shape, date format, descriptor
//! extension, matching format tags.

use crate::{FilenameConfig, FilenameError, Result};
use chrono::NaiveDate;
use tracing::debug;

/// Checks a data filename against its descriptor filename
#[derive(Debug, Clone, Default)]
pub struct FilenameValidator {
    config: FilenameConfig,
}

impl FilenameValidator {
    /// Create a validator with the default contract (`.txt`, `.csv`, `%Y-%m-%d`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with a custom contract
    #[must_use]
    pub fn with_config(config: FilenameConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &FilenameConfig {
        &self.config
    }

    /// Validate a data/descriptor filename pair.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`FilenameError`].
    pub fn validate(&self, data_filename: &str, descriptor_filename: &str) -> Result<()> {
        let data_name = last_segment(data_filename);
        if !has_extension(data_name, &self.config.data_extension) {
            return Err(FilenameError::DataExtension {
                filename: data_filename.to_string(),
                expected: self.config.data_extension.clone(),
            });
        }

        let date = check_date_format(data_name, &self.config)?;

        let descriptor_name = last_segment(descriptor_filename);
        if !has_extension(descriptor_name, &self.config.descriptor_extension) {
            return Err(FilenameError::DescriptorExtension {
                filename: descriptor_filename.to_string(),
                expected: self.config.descriptor_extension.clone(),
            });
        }

        let data_tag = format_tag(data_name);
        let descriptor_tag = format_tag(descriptor_name);
        if data_tag != descriptor_tag {
            return Err(FilenameError::FormatMismatch {
                data_tag: data_tag.to_string(),
                descriptor_tag: descriptor_tag.to_string(),
            });
        }

        debug!("Filename contract satisfied: format '{data_tag}', date {date}");
        Ok(())
    }
}

/// Validate a filename pair against the default contract.
///
/// # Errors
///
/// Returns the first violated rule as a [`FilenameError`].
pub fn validate_input(data_filename: &str, descriptor_filename: &str) -> Result<()> {
    FilenameValidator::new().validate(data_filename, descriptor_filename)
}

/// Final path segment; directories are ignored by every rule
#[must_use]
pub fn last_segment(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR)
        .next()
        .unwrap_or(path)
}

/// Whether the text after the final `.` (dot included) equals `extension`
#[must_use]
pub fn has_extension(filename: &str, extension: &str) -> bool {
    filename
        .rfind('.')
        .is_some_and(|idx| &filename[idx..] == extension)
}

/// Format tag of a file name: the first `_` field, cut at its first `.`.
///
/// `orders_2021-06-03.txt` and `orders.csv` both have the tag `orders`.
#[must_use]
pub fn format_tag(filename: &str) -> &str {
    let head = filename.split('_').next().unwrap_or(filename);
    head.split('.').next().unwrap_or(head)
}

/// Check that a data file name is `<format>_<date>` and that the date
/// matches the configured format.
///
/// # Errors
///
/// [`FilenameError::MalformedDataName`] when the name does not have exactly
/// two `_` fields, [`FilenameError::DateFormat`] when the date does not parse.
pub fn check_date_format(filename: &str, config: &FilenameConfig) -> Result<NaiveDate> {
    let fields: Vec<&str> = filename.split('_').collect();
    let [_, date_field] = fields.as_slice() else {
        return Err(FilenameError::MalformedDataName {
            filename: filename.to_string(),
            extension: config.data_extension.clone(),
        });
    };

    let token = date_field.split('.').next().unwrap_or(*date_field);
    check_date_token(token, &config.date_format)
}

/// Parse a date token strictly.
///
/// The token must parse under `format` and print back identically, so
/// unpadded fields, short years and signs are rejected along with
/// impossible calendar dates.
///
/// # Errors
///
/// [`FilenameError::DateFormat`] when the token is not a date in `format`.
pub fn check_date_token(token: &str, format: &str) -> Result<NaiveDate> {
    let date_error = || FilenameError::DateFormat {
        token: token.to_string(),
        format: format.to_string(),
    };

    let date = NaiveDate::parse_from_str(token, format).map_err(|_| date_error())?;
    if date.format(format).to_string() != token {
        return Err(date_error());
    }
    Ok(date)
}
