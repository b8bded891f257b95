//! Domain Services
//!
//! Stateless services that contain business logic.

mod ordering;

pub use ordering::{canonical_cmp, sort_entities};
