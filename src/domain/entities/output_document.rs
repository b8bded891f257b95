//! OutputDocument - the combined bundle written to the destination
//!
//! Shape: `{ "<key>": [ <entity>, <entity>, ... ] }`, pretty-printed with a
//! fixed indentation width.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::error::PackResult;

use super::ParsedEntity;

/// Key used when none is configured
pub const DEFAULT_OUTPUT_KEY: &str = "blocked_services";

/// Formatting applied when rendering a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFormat {
    /// Spaces per indentation level
    pub indent: usize,
    /// Append `\n` after the closing brace
    pub trailing_newline: bool,
}

impl Default for DocumentFormat {
    fn default() -> Self {
        Self {
            indent: 2,
            trailing_newline: false,
        }
    }
}

/// The single object written to the destination file
#[derive(Debug, Clone)]
pub struct OutputDocument {
    key: String,
    entities: Vec<ParsedEntity>,
}

impl OutputDocument {
    /// Wrap an already ordered collection
    pub fn new(key: impl Into<String>, entities: Vec<ParsedEntity>) -> Self {
        Self {
            key: key.into(),
            entities,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn entities(&self) -> &[ParsedEntity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Serialize to pretty-printed JSON text
    pub fn render(&self, format: &DocumentFormat) -> PackResult<String> {
        let indent = vec![b' '; format.indent];
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        self.serialize(&mut ser)?;
        if format.trailing_newline {
            buf.push(b'\n');
        }
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Serialize for OutputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key(), &Values(self.entities()))?;
        map.end()
    }
}

struct Values<'a>(&'a [ParsedEntity]);

impl Serialize for Values<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(ParsedEntity::value))
    }
}
