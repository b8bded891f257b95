//! Configuration module for servicepack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SERVICEPACK_*)
//! 3. Config file (`--config`, or `servicepack.toml` in the working directory)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, DEFAULT_CONFIG_FILE};
pub use types::{Config, OutputConfig, SourcesConfig, ValidationConfig};
