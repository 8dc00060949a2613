//! Fallback keyword extraction from filename and document text.
//!
//! Three tiers, collected in order and never re-sorted across tiers:
//! filename tokens, domain-pattern matches, then frequency analysis when
//! the first two tiers yielded fewer than three candidates.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::stopwords;

/// Hard cap on extracted keywords.
pub const MAX_KEYWORDS: usize = 5;

/// Longest keyword worth surfacing in a catalog UI.
const MAX_KEYWORD_CHARS: usize = 14;

/// Domain-significant document terms, Romanian and English synonyms.
static DOMAIN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(contract|contracte|acord)\b",
        r"\b(raport|rapoarte|report)\b",
        r"\b(factura|facturi|invoice)\b",
        r"\b(politica|politici|policy)\b",
        r"\b(certificat|certificate|diploma)\b",
        r"\b(propunere|propuneri|proposal)\b",
        r"\b(buget|bugete|budget)\b",
        r"\b(prezentare|prezentari|presentation)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Extract up to [`MAX_KEYWORDS`] keywords from a document.
///
/// Deterministic and pure: repeated calls with identical inputs return
/// identical sequences.
pub fn extract_keywords(text: &str, file_name: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    // Tier 1: up to two informative filename tokens.
    for token in filename_tokens(file_name).into_iter().take(2) {
        push_unique(&mut keywords, token);
    }

    // Tier 2: domain-significant terms appearing in the text.
    let text_lower = text.to_lowercase();
    for pattern in DOMAIN_PATTERNS.iter() {
        for found in pattern.find_iter(&text_lower) {
            push_unique(&mut keywords, found.as_str().to_string());
        }
    }

    // Tier 3: frequency analysis, only when the candidate set is thin.
    if keywords.len() < 3 {
        for word in frequent_words(&text_lower) {
            push_unique(&mut keywords, word);
        }
    }

    keywords.retain(|keyword| is_valid_keyword(keyword));
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Tokenize a filename into lower-cased content words.
///
/// Strips the extension, splits on `-`/`_`/`.`/whitespace, and drops
/// short, numeric, noisy, and stop-word tokens. Splitting on dots keeps
/// chained extensions like `.tar.gz` from leaking into the tokens.
fn filename_tokens(file_name: &str) -> Vec<String> {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(file_name);

    stem.split(|c: char| c == '-' || c == '_' || c == '.' || c.is_whitespace())
        .map(|token| token.trim().to_lowercase())
        .filter(|token| token.chars().count() > 3)
        .filter(|token| !stopwords::is_numeric(token))
        .filter(|token| !stopwords::is_filename_noise(token))
        .filter(|token| !stopwords::is_stop_word(token))
        .collect()
}

/// Mid-frequency content words from the text, at most three.
///
/// The ceiling scales with document length so filler words stay excluded
/// while short documents can still contribute.
fn frequent_words(text_lower: &str) -> Vec<String> {
    let words: Vec<String> = text_lower
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric()).to_string()
        })
        .filter(|word| !word.is_empty())
        .collect();

    let ceiling = 3usize.max(words.len() / 100);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in &words {
        if word.chars().count() <= 4
            || stopwords::is_numeric(word)
            || stopwords::is_stop_word(word)
            || stopwords::is_generic_word(word)
        {
            continue;
        }
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts
        .into_iter()
        .filter(|&(_, count)| count >= 2 && count <= ceiling)
        .collect();
    // Frequency descending, alphabetical on ties for determinism.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(3)
        .map(|(word, _)| word.to_string())
        .collect()
}

fn push_unique(keywords: &mut Vec<String>, candidate: String) {
    if !keywords.iter().any(|existing| existing == &candidate) {
        keywords.push(candidate);
    }
}

fn is_valid_keyword(keyword: &str) -> bool {
    !keyword.is_empty()
        && keyword.chars().count() <= MAX_KEYWORD_CHARS
        && keyword.split_whitespace().count() == 1
        && !stopwords::is_stop_word(keyword)
}
