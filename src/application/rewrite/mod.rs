//! Rewrite Use Case
//!
//! Orchestrates one aggregation run.
//!
//! This module handles:
//! - Loading every source through the SourceLoader
//! - Running the content validator over the whole collection
//! - Ordering and rendering the output document
//! - Replacing the destination file, or comparing against it in check mode

mod options;
mod result;
mod use_case;

pub use options::RewriteOptions;
pub use result::{Freshness, RenderedDocument, RewriteReport};
pub use use_case::RewriteUseCase;
