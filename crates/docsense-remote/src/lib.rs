//! Remote analysis client — wire protocol and HTTP transport with
//! exponential-backoff retries.

pub mod client;
pub mod protocol;

pub use client::{RemoteBackend, RemoteClient, RetryPolicy};
pub use protocol::{
    AnalysisRequest, AnalyzeData, ApiEnvelope, Endpoint, RemoteTag,
    RequestOptions,
};
