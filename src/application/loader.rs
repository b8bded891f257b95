//! Source Loader
//!
//! Reads and parses every requested source file in parallel, then joins.
//!
//! ## Flow
//!
//! 1. Fan out one read-and-parse per entity name (rayon)
//! 2. Wait for every branch, successful or not
//! 3. Partition: all successes, or every failure in request order

use std::path::Path;

use rayon::prelude::*;
use serde_json::Value;

use crate::domain::entities::ParsedEntity;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::EntityName;
use crate::error::{PackError, PackResult, SourceFailure};

/// Default source file extension
pub const DEFAULT_EXTENSION: &str = "yml";

/// Outcome of loading one source file
#[derive(Debug, Clone, PartialEq)]
pub enum SourceReadOutcome {
    Loaded(ParsedEntity),
    Failed(SourceFailure),
}

/// Loads `<dir>/<name>.<ext>` for a list of names through a FileSystem port
pub struct SourceLoader<FS>
where
    FS: FileSystem,
{
    fs: FS,
    extension: String,
}

impl<FS> SourceLoader<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self {
            fs,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different source file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Load every named source.
    ///
    /// Every branch runs to completion. If any failed, the error lists all
    /// failed names in request order and no entity is returned. On success
    /// the entities are in request order.
    pub fn load_all(&self, dir: &Path, names: &[EntityName]) -> PackResult<Vec<ParsedEntity>> {
        let outcomes: Vec<SourceReadOutcome> = names
            .par_iter()
            .map(|name| self.load_one(dir, name))
            .collect();

        partition_outcomes(outcomes)
    }

    /// Read and parse a single source file
    pub fn load_one(&self, dir: &Path, name: &EntityName) -> SourceReadOutcome {
        let path = name.source_path(dir, &self.extension);
        let result = self
            .fs
            .read(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| parse_source(&content));

        match result {
            Ok(value) => {
                tracing::debug!(entity = %name, path = %path.display(), "parsed source");
                SourceReadOutcome::Loaded(ParsedEntity::new(name.clone(), value))
            }
            Err(reason) => {
                tracing::debug!(entity = %name, path = %path.display(), %reason, "source failed");
                SourceReadOutcome::Failed(SourceFailure {
                    name: name.clone(),
                    reason,
                })
            }
        }
    }
}

/// Parse one YAML document into a JSON value.
///
/// A plain YAML load maps an empty or comment-only file to `null`. That
/// case is rejected here as `document is empty`, so a truncated source fails
/// the run instead of putting `null` into the bundle.
pub fn parse_source(content: &str) -> Result<Value, String> {
    let value: Value = serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?;
    if value.is_null() {
        return Err("document is empty".to_string());
    }
    Ok(value)
}

/// Split per-entity outcomes into the all-or-nothing result
pub fn partition_outcomes(outcomes: Vec<SourceReadOutcome>) -> PackResult<Vec<ParsedEntity>> {
    let mut entities = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();

    for outcome in outcomes {
        match outcome {
            SourceReadOutcome::Loaded(entity) => entities.push(entity),
            SourceReadOutcome::Failed(failure) => failures.push(failure),
        }
    }

    if failures.is_empty() {
        Ok(entities)
    } else {
        tracing::warn!(failed = failures.len(), "some source files could not be loaded");
        Err(PackError::InvalidSources { failures })
    }
}
