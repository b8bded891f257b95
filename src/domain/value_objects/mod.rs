//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod entity_name;
mod hash;

pub use entity_name::EntityName;
pub use hash::ContentHash;
