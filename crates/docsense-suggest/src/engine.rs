//! The suggestion orchestrator.

use std::sync::Arc;

use docsense_cache::{cache_key, SuggestionCache};
use docsense_core::{
    RemoteConfig, Result, SuggestOptions, SuggestionResult, SuggestionSource,
    Tag,
};
use docsense_heuristics::{classify, extract_keywords, score_tags};
use docsense_remote::{
    AnalysisRequest, Endpoint, RemoteBackend, RemoteClient, RequestOptions,
};
use tracing::{debug, info};

use crate::sanitize::{
    clamp_confidence, dedupe_tags, resolve_remote_tags, sanitize_keywords,
};

/// Fallback confidence when at least one heuristic tier produced a signal.
const FALLBACK_CONFIDENCE: f64 = 0.7;
/// Fallback confidence for an empty result.
const FALLBACK_CONFIDENCE_EMPTY: f64 = 0.3;

/// Composes cache lookup, remote analysis, and the local fallback.
///
/// The three public operations are infallible by contract: retry
/// exhaustion on the remote path degrades to the deterministic fallback
/// instead of surfacing an error.
pub struct SuggestionEngine {
    remote: Arc<dyn RemoteBackend>,
    cache: Arc<SuggestionCache>,
}

impl SuggestionEngine {
    /// Create an engine over an explicit backend and cache.
    pub fn new(remote: Arc<dyn RemoteBackend>, cache: Arc<SuggestionCache>) -> Self {
        Self { remote, cache }
    }

    /// Create an engine with a reqwest client and a default cache.
    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        Ok(Self::new(
            Arc::new(RemoteClient::new(config)?),
            Arc::new(SuggestionCache::default_cache()),
        ))
    }

    /// Suggest up to `options.max_keywords` keywords for a document.
    pub async fn suggest_keywords(
        &self,
        text: &str,
        file_name: &str,
        options: &SuggestOptions,
    ) -> Vec<String> {
        let key = cache_key(Endpoint::Keywords.operation(), text, file_name, 0);
        if let Some(hit) = self.cache.get(&key) {
            debug!("keyword suggestion served from cache");
            return hit.keywords;
        }

        let request = self.build_request(text, file_name, None, options);
        let result = match self.remote.keywords(&request).await {
            Ok(raw) => {
                let keywords = sanitize_keywords(raw, options.max_keywords);
                SuggestionResult {
                    keywords,
                    tags: Vec::new(),
                    category: "general".to_string(),
                    confidence: 1.0,
                    source: SuggestionSource::Remote,
                }
            }
            Err(err) => {
                info!(%err, "remote keywords unavailable, extracting locally");
                let keywords = sanitize_keywords(
                    extract_keywords(text, file_name),
                    options.max_keywords,
                );
                let confidence = fallback_confidence(keywords.is_empty());
                SuggestionResult {
                    keywords,
                    tags: Vec::new(),
                    category: "general".to_string(),
                    confidence,
                    source: SuggestionSource::Fallback,
                }
            }
        };

        self.cache.put(key, result.clone());
        result.keywords
    }

    /// Rank the caller's tag catalog against a document, returning up to
    /// `options.max_tags` tags.
    ///
    /// The remote path may propose tags outside the catalog; those come
    /// back as novel tags with `id = -1`. The fallback only ever returns
    /// catalog members.
    pub async fn suggest_tags(
        &self,
        text: &str,
        file_name: &str,
        catalog: &[Tag],
        options: &SuggestOptions,
    ) -> Vec<Tag> {
        let key =
            cache_key(Endpoint::Tags.operation(), text, file_name, catalog.len());
        if let Some(hit) = self.cache.get(&key) {
            debug!("tag suggestion served from cache");
            return hit.tags;
        }

        let request = self.build_request(text, file_name, Some(catalog), options);
        let result = match self.remote.tags(&request).await {
            Ok(raw) => {
                let tags = dedupe_tags(
                    resolve_remote_tags(raw, catalog),
                    options.max_tags,
                );
                SuggestionResult {
                    keywords: Vec::new(),
                    tags,
                    category: "general".to_string(),
                    confidence: 1.0,
                    source: SuggestionSource::Remote,
                }
            }
            Err(err) => {
                info!(%err, "remote tags unavailable, scoring locally");
                let scored = score_tags(
                    text,
                    catalog,
                    options.max_tags,
                    options.confidence_threshold,
                );
                let confidence = scored
                    .iter()
                    .map(|entry| entry.confidence)
                    .fold(0.0, f64::max);
                let tags = scored.into_iter().map(|entry| entry.tag).collect();
                SuggestionResult {
                    keywords: Vec::new(),
                    tags,
                    category: "general".to_string(),
                    confidence,
                    source: SuggestionSource::Fallback,
                }
            }
        };

        self.cache.put(key, result.clone());
        result.tags
    }

    /// Full analysis: keywords, ranked tags, category, confidence.
    pub async fn analyze(
        &self,
        text: &str,
        file_name: &str,
        catalog: &[Tag],
        options: &SuggestOptions,
    ) -> SuggestionResult {
        let key = cache_key(
            Endpoint::Analyze.operation(),
            text,
            file_name,
            catalog.len(),
        );
        if let Some(hit) = self.cache.get(&key) {
            debug!("analysis served from cache");
            return hit;
        }

        let request = self.build_request(text, file_name, Some(catalog), options);
        let result = match self.remote.analyze(&request).await {
            Ok(data) => {
                let keywords =
                    sanitize_keywords(data.keywords, options.max_keywords);
                let tags = dedupe_tags(
                    resolve_remote_tags(data.tags, catalog),
                    options.max_tags,
                );
                let category = if data.category.is_empty() {
                    "general".to_string()
                } else {
                    data.category
                };
                SuggestionResult {
                    keywords,
                    tags,
                    category,
                    confidence: clamp_confidence(data.confidence),
                    source: SuggestionSource::Remote,
                }
            }
            Err(err) => {
                info!(%err, "remote analysis unavailable, falling back");
                self.fallback_analysis(text, file_name, catalog, options)
            }
        };

        self.cache.put(key, result.clone());
        result
    }

    fn fallback_analysis(
        &self,
        text: &str,
        file_name: &str,
        catalog: &[Tag],
        options: &SuggestOptions,
    ) -> SuggestionResult {
        let keywords = sanitize_keywords(
            extract_keywords(text, file_name),
            options.max_keywords,
        );
        let tags: Vec<Tag> = score_tags(
            text,
            catalog,
            options.max_tags,
            options.confidence_threshold,
        )
        .into_iter()
        .map(|entry| entry.tag)
        .collect();
        let category = classify(text, file_name);
        let confidence = fallback_confidence(keywords.is_empty() && tags.is_empty());

        SuggestionResult {
            keywords,
            tags,
            category,
            confidence,
            source: SuggestionSource::Fallback,
        }
    }

    fn build_request(
        &self,
        text: &str,
        file_name: &str,
        catalog: Option<&[Tag]>,
        options: &SuggestOptions,
    ) -> AnalysisRequest {
        AnalysisRequest {
            text: text.to_string(),
            file_name: if file_name.is_empty() {
                None
            } else {
                Some(file_name.to_string())
            },
            available_tags: catalog.map(<[Tag]>::to_vec),
            options: RequestOptions {
                max_keywords: Some(options.max_keywords),
                max_tags: Some(options.max_tags),
                language: options.language.clone(),
                confidence_threshold: Some(options.confidence_threshold),
                context_analysis: options.context_analysis,
                semantic_analysis: options.semantic_analysis,
                entity_recognition: options.entity_recognition,
                category_analysis: options.category_analysis,
            },
        }
    }
}

fn fallback_confidence(empty: bool) -> f64 {
    if empty {
        FALLBACK_CONFIDENCE_EMPTY
    } else {
        FALLBACK_CONFIDENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use docsense_core::Error;
    use docsense_remote::{AnalyzeData, RemoteTag};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend whose retries are always exhausted.
    struct FailingBackend {
        calls: AtomicUsize,
    }

    impl FailingBackend {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RemoteBackend for FailingBackend {
        async fn keywords(&self, _request: &AnalysisRequest) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::RemoteUnavailable)
        }

        async fn tags(&self, _request: &AnalysisRequest) -> Result<Vec<RemoteTag>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::RemoteUnavailable)
        }

        async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalyzeData> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::RemoteUnavailable)
        }
    }

    /// Backend returning fixed keyword payloads, counting invocations.
    struct KeywordBackend {
        keywords: Vec<String>,
        calls: AtomicUsize,
    }

    impl KeywordBackend {
        fn new(keywords: &[&str]) -> Self {
            Self {
                keywords: keywords.iter().map(|s| s.to_string()).collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RemoteBackend for KeywordBackend {
        async fn keywords(&self, _request: &AnalysisRequest) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.keywords.clone())
        }

        async fn tags(&self, _request: &AnalysisRequest) -> Result<Vec<RemoteTag>> {
            Err(Error::RemoteUnavailable)
        }

        async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalyzeData> {
            Err(Error::RemoteUnavailable)
        }
    }

    fn engine(remote: Arc<dyn RemoteBackend>) -> SuggestionEngine {
        SuggestionEngine::new(remote, Arc::new(SuggestionCache::default_cache()))
    }

    fn catalog_tag(id: i64, name: &str, usage_count: u32) -> Tag {
        Tag {
            id,
            name: name.to_string(),
            is_predefined: true,
            usage_count,
        }
    }

    #[tokio::test]
    async fn test_fallback_equals_direct_extraction() {
        let engine = engine(Arc::new(FailingBackend::new()));
        let text = "Raport de activitate pentru trimestrul curent";
        let file_name = "Raport_Activitate.pdf";

        let suggested = engine
            .suggest_keywords(text, file_name, &SuggestOptions::default())
            .await;
        assert_eq!(suggested, extract_keywords(text, file_name));
    }

    #[tokio::test]
    async fn test_cache_skips_remote_on_second_call() {
        let backend = Arc::new(KeywordBackend::new(&["contract", "servicii"]));
        let engine = engine(backend.clone());
        let options = SuggestOptions::default();

        let first = engine.suggest_keywords("text", "f.pdf", &options).await;
        let second = engine.suggest_keywords("text", "f.pdf", &options).await;

        assert_eq!(first, second);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_remote_keywords_sanitized() {
        let backend = Arc::new(KeywordBackend::new(&[
            "Contract",
            "2024",
            "de",
            "two words",
            "unsirdecaracterelung",
            "servicii",
        ]));
        let engine = engine(backend);

        let keywords = engine
            .suggest_keywords("text", "", &SuggestOptions::default())
            .await;
        assert_eq!(keywords, vec!["contract", "servicii"]);
    }

    #[tokio::test]
    async fn test_fallback_tags_only_from_catalog() {
        let engine = engine(Arc::new(FailingBackend::new()));
        let catalog = vec![
            catalog_tag(1, "factura", 10),
            catalog_tag(2, "vacanta", 0),
        ];
        let text = "Factura emisa pentru servicii de consultanta. Factura scadenta.";

        let tags = engine
            .suggest_tags(text, "", &catalog, &SuggestOptions::for_tags())
            .await;
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].id, 1);
    }

    #[tokio::test]
    async fn test_fallback_analyze_fields() {
        let engine = engine(Arc::new(FailingBackend::new()));
        let catalog = vec![catalog_tag(1, "contract", 5)];
        let text = "Contract de prestari servicii semnat azi. Contract valabil un an.";

        let result = engine
            .analyze(text, "Contract_Servicii.pdf", &catalog, &SuggestOptions::default())
            .await;

        assert_eq!(result.source, SuggestionSource::Fallback);
        assert_eq!(result.category, "contract");
        assert!(result.keywords.contains(&"contract".to_string()));
        assert_eq!(result.confidence, 0.7);
        assert!(result.tags.iter().any(|t| t.id == 1));
    }

    #[tokio::test]
    async fn test_empty_inputs_never_panic() {
        let engine = engine(Arc::new(FailingBackend::new()));
        let options = SuggestOptions::default();

        assert!(engine.suggest_keywords("", "", &options).await.is_empty());
        assert!(engine.suggest_tags("", "", &[], &options).await.is_empty());

        let result = engine.analyze("", "", &[], &options).await;
        assert_eq!(result.category, "general");
        assert_eq!(result.confidence, FALLBACK_CONFIDENCE_EMPTY);
    }

    #[tokio::test]
    async fn test_analyze_cached_verbatim() {
        let engine = engine(Arc::new(FailingBackend::new()));
        let catalog = vec![catalog_tag(1, "raport", 3)];
        let options = SuggestOptions::for_analyze();

        let first = engine.analyze("raport lunar", "", &catalog, &options).await;
        let second = engine.analyze("raport lunar", "", &catalog, &options).await;
        assert_eq!(first, second);
    }
}
