//! Entity Name Value Object
//!
//! Identifies one service and, through the `<name>.<ext>` convention, one
//! source file inside the source directory.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{PackError, PackResult};

/// Validated entity name
///
/// A name never contains a path separator and is never `.` or `..`, so
/// [`EntityName::source_path`] always stays inside the base directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Create a new entity name, rejecting anything that could escape the
    /// source directory.
    pub fn new(name: impl Into<String>) -> PackResult<Self> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name == "." || name == ".." {
            Some("name refers to a directory")
        } else if name.contains(['/', '\\']) {
            Some("name contains a path separator")
        } else if name.contains('\0') {
            Some("name contains a NUL byte")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(PackError::InvalidEntityName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    /// Parse a list of raw names, failing on the first invalid one.
    pub fn parse_all<I, S>(names: I) -> PackResult<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Self::new).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve `dir/<name>.<extension>`
    pub fn source_path(&self, dir: &Path, extension: &str) -> PathBuf {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            dir.join(&self.0)
        } else {
            dir.join(format!("{}.{}", self.0, extension))
        }
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for EntityName {
    type Error = PackError;

    fn try_from(value: &str) -> PackResult<Self> {
        Self::new(value)
    }
}
