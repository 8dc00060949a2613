//! Error types for docsense.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Remote analysis unavailable")]
    RemoteUnavailable,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
