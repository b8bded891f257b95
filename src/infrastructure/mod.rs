//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system access and source discovery
//! - `validators/` - Content validators (SVG icons)

pub mod fs;
pub mod validators;

// Re-export for convenience
pub use fs::{discover_entity_names, LocalFs};
pub use validators::SvgIconValidator;
