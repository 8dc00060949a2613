//! Docsense Core — shared types, suggestion options, configuration, errors.

pub mod config;
pub mod error;
pub mod types;

pub use config::{RemoteConfig, SuggestOptions};
pub use error::{Error, Result};
pub use types::{SuggestionResult, SuggestionSource, Tag};
