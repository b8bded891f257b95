//! Domain Layer
//!
//! Pure aggregation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Parsed services and the output document
//! - `value_objects/` - Immutable value types (EntityName, ContentHash)
//! - `services/` - Stateless domain services (canonical ordering)
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
