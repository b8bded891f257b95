//! Domain Entities
//!
//! - `ParsedEntity` - One service decoded from its source file
//! - `OutputDocument` - The combined, ordered document written to disk

mod output_document;
mod parsed_entity;

pub use output_document::{DocumentFormat, OutputDocument, DEFAULT_OUTPUT_KEY};
pub use parsed_entity::ParsedEntity;
