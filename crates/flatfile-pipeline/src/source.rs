//! Content sources
//!
//! The parser never touches the filesystem directly; it asks a
//! [`ContentSource`] for the full text of each file. Implementations must be
//! usable from several threads at once if parses run concurrently.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Supplies the full text content of a named file
pub trait ContentSource {
    /// Read the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the content is unavailable.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

/// Reads files from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ContentSource for FsSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// In-memory files keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl ContentSource for MemorySource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}
