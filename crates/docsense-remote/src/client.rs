//! HTTP transport with exponential-backoff retries.
//!
//! Transport failures, non-2xx statuses, undecodable bodies, and
//! `success: false` envelopes are all retryable and indistinguishable to
//! the caller; after the attempt budget they collapse into
//! [`Error::RemoteUnavailable`].

use std::time::Duration;

use async_trait::async_trait;
use docsense_core::{Error, RemoteConfig, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::protocol::{AnalysisRequest, AnalyzeData, Endpoint, RemoteTag};

/// Retry budget with exponential backoff, no jitter.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    limit: usize,
    base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(limit: usize, base_delay: Duration) -> Self {
        Self {
            limit: limit.max(1),
            base_delay,
        }
    }

    /// Total attempts allowed for one logical call.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Delay after a failed attempt k (1-based): `base_delay * 2^(k-1)`.
    pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16) as u32;
        self.base_delay.saturating_mul(1u32 << exponent)
    }
}

/// Run an async operation under a retry policy.
///
/// Retries are sequential, never speculative; the whole call is bounded by
/// `limit * (operation timeout + backoff delay)`.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut attempt = 0usize;
    loop {
        attempt += 1;
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= policy.limit() {
                    warn!(attempts = attempt, %err, "remote attempts exhausted");
                    return Err(Error::RemoteUnavailable);
                }
                let delay = policy.delay_for_attempt(attempt);
                debug!(attempt, %err, ?delay, "remote attempt failed, backing off");
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Transport seam for the three analysis endpoints. The orchestrator holds
/// this as a trait object so tests can substitute scripted backends.
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    async fn keywords(&self, request: &AnalysisRequest) -> Result<Vec<String>>;
    async fn tags(&self, request: &AnalysisRequest) -> Result<Vec<RemoteTag>>;
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalyzeData>;
}

/// Reqwest-backed analysis client.
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl RemoteClient {
    /// Build a client from configuration. The underlying HTTP client
    /// carries a finite request timeout so no attempt can hang.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::new(config.max_attempts, config.base_delay),
        })
    }

    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: &AnalysisRequest,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        debug!(%url, operation = endpoint.operation(), "calling analysis service");
        with_retry(self.retry, || self.attempt::<T>(&url, request)).await
    }

    /// One attempt: POST, check status, decode envelope, check `success`.
    async fn attempt<T: DeserializeOwned>(
        &self,
        url: &str,
        request: &AnalysisRequest,
    ) -> Result<T> {
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Http(format!("status {}", response.status())));
        }

        let envelope: crate::protocol::ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;

        if !envelope.success {
            return Err(Error::InvalidResponse(
                envelope.error.unwrap_or_else(|| "success=false".to_string()),
            ));
        }
        envelope
            .data
            .ok_or_else(|| Error::InvalidResponse("missing data".to_string()))
    }
}

#[async_trait]
impl RemoteBackend for RemoteClient {
    async fn keywords(&self, request: &AnalysisRequest) -> Result<Vec<String>> {
        self.post(Endpoint::Keywords, request).await
    }

    async fn tags(&self, request: &AnalysisRequest) -> Result<Vec<RemoteTag>> {
        self.post(Endpoint::Tags, request).await
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalyzeData> {
        self.post(Endpoint::Analyze, request).await
    }
}
