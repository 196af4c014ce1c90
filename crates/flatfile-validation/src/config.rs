//! Filename contract configuration

/// Expected extensions and date format for a data/descriptor pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameConfig {
    /// Data file extension, including the dot (default: `.txt`)
    pub data_extension: String,
    /// Descriptor file extension, including the dot (default: `.csv`)
    pub descriptor_extension: String,
    /// `chrono` format of the date embedded in the data file name (default: `%Y-%m-%d`)
    pub date_format: String,
}

impl Default for FilenameConfig {
    fn default() -> Self {
        Self {
            data_extension: ".txt".to_string(),
            descriptor_extension: ".csv".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl FilenameConfig {
    /// Create a configuration with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data file extension (a missing leading dot is added)
    #[must_use]
    pub fn data_extension(mut self, extension: &str) -> Self {
        self.data_extension = normalize_extension(extension);
        self
    }

    /// Set the descriptor file extension (a missing leading dot is added)
    #[must_use]
    pub fn descriptor_extension(mut self, extension: &str) -> Self {
        self.descriptor_extension = normalize_extension(extension);
        self
    }

    /// Set the date format
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}

fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}
