//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod content_validator;
pub mod file_system;

pub use content_validator::{AcceptAll, ContentValidator};
pub use file_system::{FileSystem, FsError, FsResult};
