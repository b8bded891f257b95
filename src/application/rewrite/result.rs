//! Rewrite result types

use std::path::PathBuf;

use crate::domain::value_objects::ContentHash;

/// A validated, ordered document rendered to text but not yet written
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Number of entities in the document
    pub entity_count: usize,
    /// Serialized document
    pub content: String,
}

impl RenderedDocument {
    pub fn digest(&self) -> ContentHash {
        ContentHash::from_bytes(self.content.as_bytes())
    }
}

/// Summary of a successful rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    /// Destination that was replaced
    pub output: PathBuf,
    /// Number of entities written
    pub entity_count: usize,
    /// Size of the written document
    pub bytes: usize,
    /// SHA-256 of the written document
    pub digest: ContentHash,
}

/// How the current destination compares with a fresh render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// Destination matches byte for byte
    UpToDate,
    /// Destination does not exist yet
    Missing,
    /// Destination differs; carries a unified diff from current to expected
    Stale { diff: String },
}

impl Freshness {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Freshness::UpToDate)
    }
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Freshness::UpToDate => write!(f, "up to date"),
            Freshness::Missing => write!(f, "missing"),
            Freshness::Stale { .. } => write!(f, "stale"),
        }
    }
}
