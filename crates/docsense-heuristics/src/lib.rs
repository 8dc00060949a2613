//! Heuristic suggestion fallback — replaces the remote analysis service.
//!
//! Produces keywords, ranked tags, and a coarse document category using
//! stop-word filtering, regex pattern matching, frequency analysis, and a
//! relevance scoring heuristic with Romanian morphological-variant matching.
//! Everything here is pure and deterministic: the same inputs always yield
//! the same outputs, with no network or clock dependency.

pub mod category;
pub mod keywords;
pub mod stopwords;
pub mod tags;

pub use category::classify;
pub use keywords::extract_keywords;
pub use tags::{score_tags, TagScore};
