//! Suggestion orchestrator — the public entry point of the engine.
//!
//! Composes the cache, the remote analysis client, and the deterministic
//! local fallback. The three public operations never return an error:
//! when the remote path is exhausted they degrade to the fallback
//! heuristics, so a caller's cataloging workflow is never blocked.

pub mod engine;
pub mod sanitize;

pub use engine::SuggestionEngine;
