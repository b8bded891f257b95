//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{RewriteOptions, DEFAULT_EXTENSION};
use crate::domain::entities::{DocumentFormat, DEFAULT_OUTPUT_KEY};
use crate::error::PackResult;
use crate::infrastructure::validators::{
    SvgIconValidator, DEFAULT_ICON_FIELD, DEFAULT_MAX_ICON_BYTES,
};

use super::loader::{self, ConfigWarning};

/// Source directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_source_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            extension: default_extension(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("services")
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Output document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    #[serde(default = "default_output_key")]
    pub key: String,

    #[serde(default = "default_indent")]
    pub indent: usize,

    #[serde(default)]
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            key: default_output_key(),
            indent: default_indent(),
            trailing_newline: false,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("services.json")
}

fn default_output_key() -> String {
    DEFAULT_OUTPUT_KEY.to_string()
}

fn default_indent() -> usize {
    2
}

/// Content validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_true")]
    pub svg_icons: bool,

    #[serde(default = "default_icon_field")]
    pub icon_field: String,

    #[serde(default = "default_true")]
    pub require_icon: bool,

    #[serde(default = "default_max_icon_bytes")]
    pub max_icon_bytes: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            svg_icons: true,
            icon_field: default_icon_field(),
            require_icon: true,
            max_icon_bytes: default_max_icon_bytes(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_icon_field() -> String {
    DEFAULT_ICON_FIELD.to_string()
}

fn default_max_icon_bytes() -> usize {
    DEFAULT_MAX_ICON_BYTES
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load an explicit config file, or the default one if present, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> PackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Options for one rewrite run
    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions::new(&self.sources.dir, &self.output.path)
            .with_extension(self.sources.extension.as_str())
            .with_key(self.output.key.as_str())
            .with_format(DocumentFormat {
                indent: self.output.indent,
                trailing_newline: self.output.trailing_newline,
            })
    }

    /// SVG icon validator built from `[validation]`
    pub fn icon_validator(&self) -> SvgIconValidator {
        SvgIconValidator::new()
            .with_field(self.validation.icon_field.as_str())
            .with_require_icon(self.validation.require_icon)
            .with_max_bytes(self.validation.max_icon_bytes)
    }
}
