//! Wire contract for the analysis service (camelCase JSON).

use docsense_core::Tag;
use serde::{Deserialize, Serialize};

/// The three logical analysis endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Keywords,
    Tags,
    Analyze,
}

impl Endpoint {
    /// URL path segment appended to the service base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Keywords => "/keywords",
            Endpoint::Tags => "/tags",
            Endpoint::Analyze => "/analyze",
        }
    }

    /// Operation name used in cache keys and logs.
    pub fn operation(&self) -> &'static str {
        match self {
            Endpoint::Keywords => "keywords",
            Endpoint::Tags => "tags",
            Endpoint::Analyze => "analyze",
        }
    }
}

/// Request body shared by all three endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_tags: Option<Vec<Tag>>,
    pub options: RequestOptions,
}

/// Options forwarded to the remote service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_keywords: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tags: Option<usize>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_threshold: Option<f64>,
    pub context_analysis: bool,
    pub semantic_analysis: bool,
    pub entity_recognition: bool,
    pub category_analysis: bool,
}

/// Response envelope; a logically-failed response carries
/// `success: false` and is treated as a failed attempt.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The `/tags` endpoint may return bare names (novel AI-proposed tags)
/// or full catalog records.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RemoteTag {
    Record(Tag),
    Name(String),
}

/// Payload of the `/analyze` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeData {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub tags: Vec<RemoteTag>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub entities: Option<Vec<String>>,
}
