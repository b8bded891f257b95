//! servicepack - compiles per-service YAML definitions into one JSON bundle
//!
//! Every `<name>.yml` source is read and parsed in parallel. If any source
//! fails, or any embedded SVG icon is invalid, nothing is written. Otherwise
//! the services are put in a canonical order and the destination file is
//! replaced atomically with `{ "blocked_services": [ ... ] }`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

use std::path::Path;

// Re-exports for convenience
pub use application::{
    parse_source, Freshness, RewriteOptions, RewriteReport, RewriteUseCase, SourceLoader,
    SourceReadOutcome,
};
pub use config::Config;
pub use domain::entities::{DocumentFormat, OutputDocument, ParsedEntity};
pub use domain::ports::{AcceptAll, ContentValidator, FileSystem};
pub use domain::services::{canonical_cmp, sort_entities};
pub use domain::value_objects::{ContentHash, EntityName};
pub use error::{ContentViolation, PackError, PackResult, SourceFailure};
pub use infrastructure::{discover_entity_names, LocalFs, SvgIconValidator};

/// Load `<dir>/<name>.yml` for every name from the local disk.
///
/// Fails with [`PackError::InvalidSources`] listing every failed name if any
/// source could not be read or parsed.
pub fn load_all(dir: &Path, names: &[EntityName]) -> PackResult<Vec<ParsedEntity>> {
    SourceLoader::new(LocalFs::new()).load_all(dir, names)
}

/// Aggregate `names` from `input_dir` into `output` with default settings,
/// running `validator` over the parsed collection.
pub fn rewrite<V: ContentValidator>(
    input_dir: &Path,
    output: &Path,
    names: &[EntityName],
    validator: V,
) -> PackResult<RewriteReport> {
    let options = RewriteOptions::new(input_dir, output);
    RewriteUseCase::new(LocalFs::new(), validator).execute(names, &options)
}
