//! Source discovery
//!
//! Lists the entity names available in a source directory when the caller
//! does not supply them explicitly.

use std::fs;
use std::path::Path;

use crate::domain::value_objects::EntityName;
use crate::error::{PackError, PackResult};

/// List `<name>.<extension>` files directly inside `dir`.
///
/// Hidden files and subdirectories are skipped. Names are returned sorted
/// so the request order is stable across platforms.
pub fn discover_entity_names(dir: &Path, extension: &str) -> PackResult<Vec<EntityName>> {
    if !dir.is_dir() {
        return Err(PackError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let extension = extension.trim_start_matches('.');
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.starts_with('.') {
            continue;
        }
        names.push(EntityName::new(stem)?);
    }

    names.sort();
    tracing::debug!(dir = %dir.display(), count = names.len(), "discovered source files");
    Ok(names)
}
