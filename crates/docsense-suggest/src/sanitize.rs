//! Result sanitation — enforces the data-model invariants on every
//! result, whether it came from the remote service or the fallback.

use docsense_core::Tag;
use docsense_heuristics::stopwords;
use docsense_remote::RemoteTag;
use std::collections::HashSet;

/// Longest keyword worth surfacing; matches the fallback extractor's cap.
const MAX_KEYWORD_CHARS: usize = 14;

/// Normalize and filter keywords: lower-cased, non-empty, single-word,
/// non-numeric, no stop-words, at most 14 chars, case-insensitively
/// unique, truncated to `max`.
pub fn sanitize_keywords(raw: Vec<String>, max: usize) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty()
            || keyword.chars().count() > MAX_KEYWORD_CHARS
            || keyword.split_whitespace().count() != 1
            || keyword.chars().all(|c| c.is_ascii_digit())
            || stopwords::is_stop_word(&keyword)
        {
            continue;
        }
        if keywords.iter().any(|existing| existing == &keyword) {
            continue;
        }
        keywords.push(keyword);
        if keywords.len() == max {
            break;
        }
    }
    keywords
}

/// Resolve remote tag payloads against the caller's catalog.
///
/// Bare names are matched case-insensitively to catalog entries; names the
/// catalog does not know become novel tags with `id = -1`.
pub fn resolve_remote_tags(raw: Vec<RemoteTag>, catalog: &[Tag]) -> Vec<Tag> {
    raw.into_iter()
        .map(|remote| match remote {
            RemoteTag::Record(tag) => tag,
            RemoteTag::Name(name) => catalog
                .iter()
                .find(|tag| tag.name.eq_ignore_ascii_case(&name))
                .cloned()
                .unwrap_or_else(|| Tag::novel(name)),
        })
        .collect()
}

/// Drop duplicate tags and truncate to `max`.
///
/// Catalog tags are deduplicated by id; novel tags (negative ids) by
/// lower-cased name, since they all share the sentinel id.
pub fn dedupe_tags(tags: Vec<Tag>, max: usize) -> Vec<Tag> {
    let mut seen_ids: HashSet<i64> = HashSet::new();
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut unique: Vec<Tag> = Vec::new();

    for tag in tags {
        let fresh = if tag.id >= 0 {
            seen_ids.insert(tag.id)
        } else {
            seen_names.insert(tag.name.to_lowercase())
        };
        if fresh {
            unique.push(tag);
            if unique.len() == max {
                break;
            }
        }
    }
    unique
}

/// Clamp a confidence value into `[0, 1]`; NaN becomes 0.
pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, 1.0)
}
