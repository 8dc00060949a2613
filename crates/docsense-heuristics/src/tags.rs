//! Tag relevance scoring against a caller-supplied catalog.
//!
//! Exact word-boundary matches dominate the score; a looser substring probe
//! over fixed Romanian inflection suffixes trades precision for recall on
//! inflected forms. Category-synonym and popularity bonuses break ties
//! between equally-matched tags.

use std::cmp::Ordering;
use std::collections::HashSet;

use docsense_core::Tag;
use tracing::debug;

use crate::category::CATEGORY_TABLE;
use crate::stopwords;

/// Romanian inflection suffixes probed as plain substrings.
const SUFFIX_VARIANTS: &[&str] = &[
    "a", "i", "e", "ul", "ului", "uri", "lor", "le", "ilor", "elor",
];

const EXACT_MATCH_WEIGHT: f64 = 5.0;
const VARIANT_MATCH_WEIGHT: f64 = 2.0;
const CATEGORY_MATCH_WEIGHT: f64 = 2.0;
const USAGE_BONUS_DIVISOR: f64 = 20.0;
const GENERIC_PENALTY: f64 = 0.2;
const SCORE_CEILING: f64 = 15.0;
const MIN_SCORE: f64 = 0.5;

/// A catalog tag with its raw relevance score and normalized confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct TagScore {
    pub tag: Tag,
    pub score: f64,
    pub confidence: f64,
}

/// Rank catalog tags by relevance to the text.
///
/// Returns at most `max_tags` survivors with `confidence >= threshold`,
/// sorted by descending raw score (name-alphabetical on ties, so the
/// ranking is deterministic). Duplicate catalog ids are scored once.
pub fn score_tags(
    text: &str,
    catalog: &[Tag],
    max_tags: usize,
    threshold: f64,
) -> Vec<TagScore> {
    let text_lower = text.to_lowercase();
    let mut seen_ids: HashSet<i64> = HashSet::new();
    let mut scored: Vec<TagScore> = Vec::new();

    for tag in catalog {
        if !seen_ids.insert(tag.id) {
            continue;
        }

        let tokens = tag_tokens(&tag.name);
        if tokens.is_empty() {
            continue;
        }

        let mut score = 0.0_f64;
        for token in &tokens {
            if token.chars().count() <= 2 {
                continue;
            }
            score += EXACT_MATCH_WEIGHT
                * word_boundary_count(&text_lower, token) as f64;
            for suffix in SUFFIX_VARIANTS {
                if text_lower.contains(&format!("{token}{suffix}")) {
                    score += VARIANT_MATCH_WEIGHT;
                }
            }
        }

        score += CATEGORY_MATCH_WEIGHT
            * category_synonym_hits(&tag.name.to_lowercase(), &text_lower) as f64;
        score += (tag.usage_count as f64 / USAGE_BONUS_DIVISOR).min(1.0);

        if tokens.iter().any(|token| stopwords::is_generic_word(token)) {
            score *= GENERIC_PENALTY;
        }

        let confidence = (score / SCORE_CEILING).min(1.0);
        if confidence >= threshold && score > MIN_SCORE {
            debug!(tag = %tag.name, score, confidence, "tag kept");
            scored.push(TagScore {
                tag: tag.clone(),
                score,
                confidence,
            });
        }
    }

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.tag.name.cmp(&b.tag.name))
    });
    scored.truncate(max_tags);
    scored
}

/// Lower-cased tag-name tokens with stop-words removed.
fn tag_tokens(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .filter(|token| !stopwords::is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Whole-word occurrences of `token` in the already-lowercased text.
///
/// A plain substring scan with alphanumeric-neighbor checks; compiling a
/// pattern per catalog token would dominate the scoring cost.
fn word_boundary_count(text_lower: &str, token: &str) -> usize {
    if token.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut search_from = 0;
    while let Some(offset) = text_lower[search_from..].find(token) {
        let start = search_from + offset;
        let end = start + token.len();
        let bounded_left = !text_lower[..start]
            .chars()
            .next_back()
            .map_or(false, is_word_char);
        let bounded_right = !text_lower[end..].chars().next().map_or(false, is_word_char);
        if bounded_left && bounded_right {
            count += 1;
        }
        search_from = end;
    }
    count
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Distinct synonym hits for the first category whose synonyms appear in
/// the tag name.
fn category_synonym_hits(name_lower: &str, text_lower: &str) -> usize {
    for (_, synonyms) in CATEGORY_TABLE {
        if synonyms.iter().any(|synonym| name_lower.contains(synonym)) {
            return synonyms
                .iter()
                .filter(|synonym| text_lower.contains(**synonym))
                .count();
        }
    }
    0
}
