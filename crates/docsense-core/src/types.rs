//! Core suggestion types shared across the workspace.
//!
//! Wire names follow the analysis service's JSON contract (camelCase),
//! so these types serialize directly into request/response payloads.

use serde::{Deserialize, Serialize};

/// A candidate classification tag from the caller's catalog.
///
/// The suggestion engine ranks tags, it never creates or persists them;
/// the one exception is a novel remote-proposed tag, which is surfaced
/// with `id = -1` and left for the caller to adopt or discard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_predefined: bool,
    #[serde(default)]
    pub usage_count: u32,
}

impl Tag {
    /// A tag proposed by the remote service that is absent from the
    /// caller's catalog.
    pub fn novel(name: impl Into<String>) -> Self {
        Self {
            id: -1,
            name: name.into(),
            is_predefined: false,
            usage_count: 0,
        }
    }
}

/// Which path produced a suggestion result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    Remote,
    Fallback,
}

/// Combined suggestion result for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    /// Suggested keywords, highest-value first.
    pub keywords: Vec<String>,
    /// Ranked classification tags.
    pub tags: Vec<Tag>,
    /// Coarse document category ("general" when nothing matched).
    pub category: String,
    /// Support strength in `[0, 1]`.
    pub confidence: f64,
    /// Remote or local-fallback origin.
    pub source: SuggestionSource,
}

impl SuggestionResult {
    /// An empty result attributed to the given source.
    pub fn empty(source: SuggestionSource) -> Self {
        Self {
            keywords: Vec::new(),
            tags: Vec::new(),
            category: "general".to_string(),
            confidence: 0.0,
            source,
        }
    }
}
