//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SourceLoader` - Parallel read-and-parse with all-or-nothing results
//! - `RewriteUseCase` - Load, validate, order, and write the output document

pub mod loader;
pub mod rewrite;

pub use loader::{parse_source, SourceLoader, SourceReadOutcome, DEFAULT_EXTENSION};
pub use rewrite::{Freshness, RenderedDocument, RewriteOptions, RewriteReport, RewriteUseCase};
