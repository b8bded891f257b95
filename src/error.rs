//! Error types for servicepack
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::EntityName;

/// Result type alias for servicepack operations
pub type PackResult<T> = Result<T, PackError>;

/// One source file that could not be read or parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub name: EntityName,
    pub reason: String,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

/// One problem found by a content validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentViolation {
    pub entity: EntityName,
    pub field: String,
    pub message: String,
}

impl ContentViolation {
    pub fn new(entity: &EntityName, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entity: entity.clone(),
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ContentViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.entity, self.field, self.message)
    }
}

/// Main error type for servicepack operations
#[derive(Error, Debug)]
pub enum PackError {
    /// One or more source files could not be read or parsed
    #[error("error while reading source files: {}", join_names(.failures))]
    InvalidSources { failures: Vec<SourceFailure> },

    /// The combined collection failed domain validation
    #[error("invalid content in {} place(s): {}", .violations.len(), join_display(.violations))]
    InvalidContent { violations: Vec<ContentViolation> },

    /// The destination could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Entity name would not map to a file inside the source directory
    #[error("invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: &'static str },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Output document could not be serialized
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    /// Names of the entities that failed to load, in request order.
    ///
    /// Empty for every variant other than `InvalidSources`.
    pub fn failed_names(&self) -> Vec<&EntityName> {
        match self {
            PackError::InvalidSources { failures } => failures.iter().map(|f| &f.name).collect(),
            _ => Vec::new(),
        }
    }
}

fn join_names(failures: &[SourceFailure]) -> String {
    failures
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_display<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
