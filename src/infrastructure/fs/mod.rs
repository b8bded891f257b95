//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod discovery;
mod local;

pub use discovery::discover_entity_names;
pub use local::LocalFs;
