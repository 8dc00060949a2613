//! Suggestion options and remote-client configuration.

use std::time::Duration;

/// Per-call tuning for the suggestion operations.
///
/// The analysis feature flags are forwarded to the remote service as-is;
/// the local fallback ignores them.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestOptions {
    /// Upper bound on returned keywords.
    pub max_keywords: usize,
    /// Upper bound on returned tags.
    pub max_tags: usize,
    /// Document language hint, forwarded to the remote service.
    pub language: String,
    /// Minimum tag confidence in `[0, 1]`.
    pub confidence_threshold: f64,
    pub context_analysis: bool,
    pub semantic_analysis: bool,
    pub entity_recognition: bool,
    pub category_analysis: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            max_keywords: 5,
            max_tags: 3,
            language: "ro".to_string(),
            confidence_threshold: 0.2,
            context_analysis: false,
            semantic_analysis: false,
            entity_recognition: false,
            category_analysis: true,
        }
    }
}

impl SuggestOptions {
    /// Defaults for tag suggestion (threshold 0.2).
    pub fn for_tags() -> Self {
        Self::default()
    }

    /// Defaults for full analysis (threshold 0.6).
    pub fn for_analyze() -> Self {
        Self {
            confidence_threshold: 0.6,
            ..Self::default()
        }
    }
}

/// Configuration for the remote analysis client.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the analysis service; endpoint paths are appended.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Total attempts per logical call.
    pub max_attempts: usize,
    /// Backoff base; attempt k waits `base_delay * 2^(k-1)`.
    pub base_delay: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3004/api/analysis".to_string(),
            timeout: Duration::from_secs(10),
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RemoteConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url =
            std::env::var("DOCSENSE_API_URL").unwrap_or(defaults.base_url);
        let timeout = std::env::var("DOCSENSE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let max_attempts = std::env::var("DOCSENSE_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_attempts);
        let base_delay = std::env::var("DOCSENSE_BASE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.base_delay);

        Self {
            base_url,
            timeout,
            max_attempts,
            base_delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_defaults() {
        let opts = SuggestOptions::default();
        assert_eq!(opts.max_keywords, 5);
        assert_eq!(opts.max_tags, 3);
        assert_eq!(opts.confidence_threshold, 0.2);
    }

    #[test]
    fn test_analyze_threshold() {
        let opts = SuggestOptions::for_analyze();
        assert_eq!(opts.confidence_threshold, 0.6);
        assert_eq!(opts.max_tags, 3);
    }

    #[test]
    fn test_remote_defaults() {
        let config = RemoteConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.base_delay, Duration::from_secs(1));
    }
}
