//! Rewrite Use Case
//!
//! Load, validate, order, render, write. The destination is touched only
//! after loading and validation have both succeeded.

use crate::application::loader::SourceLoader;
use crate::domain::entities::OutputDocument;
use crate::domain::ports::{ContentValidator, FileSystem, FsError};
use crate::domain::services::sort_entities;
use crate::domain::value_objects::EntityName;
use crate::error::{PackError, PackResult};

use super::options::RewriteOptions;
use super::result::{Freshness, RenderedDocument, RewriteReport};

/// Rewrite use case - aggregates sources into one output document
pub struct RewriteUseCase<FS, V>
where
    FS: FileSystem,
    V: ContentValidator,
{
    fs: FS,
    validator: V,
}

impl<FS, V> RewriteUseCase<FS, V>
where
    FS: FileSystem,
    V: ContentValidator,
{
    /// Create a new rewrite use case
    pub fn new(fs: FS, validator: V) -> Self {
        Self { fs, validator }
    }

    /// Run load, validation, ordering, and rendering without writing.
    pub fn render(
        &self,
        names: &[EntityName],
        options: &RewriteOptions,
    ) -> PackResult<RenderedDocument> {
        let loader = SourceLoader::new(&self.fs).with_extension(options.extension.as_str());
        let mut entities = loader.load_all(&options.source_dir, names)?;
        tracing::debug!(count = entities.len(), "all sources loaded");

        self.validator
            .validate(&entities)
            .map_err(|violations| PackError::InvalidContent { violations })?;

        sort_entities(&mut entities);

        let document = OutputDocument::new(options.key.as_str(), entities);
        let content = document.render(&options.format)?;

        Ok(RenderedDocument {
            entity_count: document.len(),
            content,
        })
    }

    /// Render and replace the destination file in full.
    pub fn execute(
        &self,
        names: &[EntityName],
        options: &RewriteOptions,
    ) -> PackResult<RewriteReport> {
        let rendered = self.render(names, options)?;

        self.fs
            .write(&options.output, &rendered.content)
            .map_err(|e| PackError::Write {
                path: options.output.clone(),
                source: e.into_io(),
            })?;

        let report = RewriteReport {
            output: options.output.clone(),
            entity_count: rendered.entity_count,
            bytes: rendered.content.len(),
            digest: rendered.digest(),
        };
        tracing::info!(
            output = %report.output.display(),
            entities = report.entity_count,
            digest = %report.digest,
            "output rewritten"
        );
        Ok(report)
    }

    /// Render and compare with the current destination, never writing.
    pub fn check(&self, names: &[EntityName], options: &RewriteOptions) -> PackResult<Freshness> {
        let rendered = self.render(names, options)?;

        let current = match self.fs.read(&options.output) {
            Ok(content) => content,
            Err(FsError::NotFound(_)) => return Ok(Freshness::Missing),
            Err(e) => return Err(PackError::Io(e.into_io())),
        };

        if current == rendered.content {
            return Ok(Freshness::UpToDate);
        }

        let path = options.output.display();
        let diff = similar::TextDiff::from_lines(&current, &rendered.content)
            .unified_diff()
            .header(&format!("a/{}", path), &format!("b/{}", path))
            .to_string();
        Ok(Freshness::Stale { diff })
    }
}
