//! End-to-end suggestion flows over scripted remote backends.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use docsense_cache::SuggestionCache;
use docsense_core::{Error, Result, SuggestOptions, SuggestionSource, Tag};
use docsense_heuristics::extract_keywords;
use docsense_remote::{AnalysisRequest, AnalyzeData, RemoteBackend, RemoteTag};
use docsense_suggest::SuggestionEngine;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("docsense=debug")
        .try_init();
}

/// Remote service that is always down.
struct DownBackend;

#[async_trait]
impl RemoteBackend for DownBackend {
    async fn keywords(&self, _request: &AnalysisRequest) -> Result<Vec<String>> {
        Err(Error::RemoteUnavailable)
    }

    async fn tags(&self, _request: &AnalysisRequest) -> Result<Vec<RemoteTag>> {
        Err(Error::RemoteUnavailable)
    }

    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalyzeData> {
        Err(Error::RemoteUnavailable)
    }
}

/// Healthy remote service with canned responses.
struct HealthyBackend {
    analyze_calls: AtomicUsize,
}

impl HealthyBackend {
    fn new() -> Self {
        Self {
            analyze_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RemoteBackend for HealthyBackend {
    async fn keywords(&self, _request: &AnalysisRequest) -> Result<Vec<String>> {
        Ok(vec!["licitatie".into(), "oferta".into()])
    }

    async fn tags(&self, request: &AnalysisRequest) -> Result<Vec<RemoteTag>> {
        // Echo one catalog name plus a novel proposal.
        let known = request
            .available_tags
            .as_ref()
            .and_then(|tags| tags.first())
            .map(|tag| tag.name.clone())
            .unwrap_or_default();
        Ok(vec![
            RemoteTag::Name(known),
            RemoteTag::Name("strategie".into()),
        ])
    }

    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalyzeData> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        Ok(AnalyzeData {
            keywords: vec!["contract".into(), "contract".into(), "2024".into()],
            tags: Vec::new(),
            category: "contract".into(),
            confidence: 1.4,
            summary: None,
            entities: None,
        })
    }
}

fn engine(remote: Arc<dyn RemoteBackend>) -> SuggestionEngine {
    SuggestionEngine::new(remote, Arc::new(SuggestionCache::default_cache()))
}

fn catalog() -> Vec<Tag> {
    vec![
        Tag {
            id: 1,
            name: "factura".into(),
            is_predefined: true,
            usage_count: 10,
        },
        Tag {
            id: 2,
            name: "contract".into(),
            is_predefined: true,
            usage_count: 25,
        },
    ]
}

#[tokio::test]
async fn filename_tokens_survive_remote_outage() {
    init_tracing();
    let engine = engine(Arc::new(DownBackend));

    let keywords = engine
        .suggest_keywords("", "Contract_Servicii_2024.pdf", &SuggestOptions::default())
        .await;

    assert!(keywords.contains(&"servicii".to_string()));
    assert!(!keywords.contains(&"2024".to_string()));
    assert!(!keywords.contains(&"pdf".to_string()));
}

#[tokio::test]
async fn repeated_invoice_text_ranks_invoice_tag() {
    init_tracing();
    let engine = engine(Arc::new(DownBackend));
    let text = "Factura nr. 114 emisă pentru servicii. \
                Factura nr. 114 emisă pentru servicii. \
                Factura nr. 114 emisă pentru servicii.";

    let tags = engine
        .suggest_tags(text, "", &catalog(), &SuggestOptions::for_tags())
        .await;

    assert_eq!(tags[0].id, 1);
}

#[tokio::test]
async fn distinct_words_yield_no_frequency_keywords() {
    init_tracing();
    let engine = engine(Arc::new(DownBackend));
    let text: String = (0..50)
        .map(|i| format!("termen{:02}", i))
        .collect::<Vec<_>>()
        .join(" ");

    let keywords = engine
        .suggest_keywords(&text, "", &SuggestOptions::default())
        .await;
    assert!(keywords.is_empty());
}

#[tokio::test]
async fn outage_result_equals_direct_fallback() {
    init_tracing();
    let engine = engine(Arc::new(DownBackend));
    let text = "Raport de activitate trimis departamentului financiar";
    let file_name = "Raport_Trimestrial.pdf";

    let suggested = engine
        .suggest_keywords(text, file_name, &SuggestOptions::default())
        .await;
    assert_eq!(suggested, extract_keywords(text, file_name));
}

#[tokio::test]
async fn remote_tags_resolve_against_catalog() {
    init_tracing();
    let engine = engine(Arc::new(HealthyBackend::new()));

    let tags = engine
        .suggest_tags("orice text", "", &catalog(), &SuggestOptions::for_tags())
        .await;

    // First entry resolved to the catalog record, second is novel.
    assert_eq!(tags[0].id, 1);
    assert_eq!(tags[0].usage_count, 10);
    assert_eq!(tags[1].id, -1);
    assert_eq!(tags[1].name, "strategie");
}

#[tokio::test]
async fn remote_analysis_is_clamped_and_cached() {
    init_tracing();
    let backend = Arc::new(HealthyBackend::new());
    let engine = engine(backend.clone());
    let options = SuggestOptions::for_analyze();

    let first = engine.analyze("text", "f.pdf", &catalog(), &options).await;
    assert_eq!(first.source, SuggestionSource::Remote);
    assert_eq!(first.confidence, 1.0);
    // Duplicate and numeric keywords removed.
    assert_eq!(first.keywords, vec!["contract"]);

    let second = engine.analyze("text", "f.pdf", &catalog(), &options).await;
    assert_eq!(first, second);
    assert_eq!(backend.analyze_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fallback_results_are_deterministic() {
    init_tracing();
    let engine = engine(Arc::new(DownBackend));
    let text = "Contract de colaborare semnat. Contract inregistrat la dosar.";
    let options = SuggestOptions::default();

    let first = engine.analyze(text, "Dosar_Colaborare.pdf", &catalog(), &options).await;

    // Fresh engine, no cache carry-over: byte-identical result.
    let rerun = SuggestionEngine::new(
        Arc::new(DownBackend),
        Arc::new(SuggestionCache::default_cache()),
    );
    let second = rerun
        .analyze(text, "Dosar_Colaborare.pdf", &catalog(), &options)
        .await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn bounds_hold_for_small_limits() {
    init_tracing();
    let engine = engine(Arc::new(DownBackend));
    let options = SuggestOptions {
        max_keywords: 2,
        max_tags: 1,
        ..SuggestOptions::default()
    };
    let text = "contract raport factura certificat buget prezentare \
                contract raport factura certificat";

    let result = engine
        .analyze(text, "Arhiva_Documente.pdf", &catalog(), &options)
        .await;
    assert!(result.keywords.len() <= 2);
    assert!(result.tags.len() <= 1);
}
