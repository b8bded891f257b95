//! Rewrite options

use std::path::PathBuf;

use crate::application::loader::DEFAULT_EXTENSION;
use crate::domain::entities::{DocumentFormat, DEFAULT_OUTPUT_KEY};

/// Options for one rewrite run
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Directory holding `<name>.<extension>` source files
    pub source_dir: PathBuf,
    /// Destination file, replaced in full on success
    pub output: PathBuf,
    /// Source file extension
    pub extension: String,
    /// Key wrapping the ordered entities in the output document
    pub key: String,
    /// Output formatting
    pub format: DocumentFormat,
}

impl RewriteOptions {
    /// Create options with default extension, key, and format
    pub fn new(source_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output: output.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            key: DEFAULT_OUTPUT_KEY.to_string(),
            format: DocumentFormat::default(),
        }
    }

    /// Set source file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set output key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set output formatting
    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }
}
