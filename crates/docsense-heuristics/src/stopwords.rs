//! Bundled Romanian + English stop-word and noise-word tables.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const ROMANIAN: &[&str] = &[
    "acea", "aceasta", "această", "acel", "acele", "acest", "acesta", "aceste",
    "acestui", "ai", "al", "ale", "alt", "alta", "alte", "am", "apoi", "ar",
    "are", "asta", "astfel", "au", "avea", "avem", "bine", "ca", "care", "cat",
    "către", "ce", "cea", "cel", "cele", "ceva", "cine", "cu", "cum", "daca",
    "dacă", "dar", "de", "deci", "despre", "din", "dintre", "doar", "dupa",
    "după", "ea", "ei", "el", "ele", "era", "este", "eu", "fara", "fără", "fi",
    "fie", "fiecare", "foarte", "fost", "iar", "ii", "il", "in", "insa", "însă",
    "intre", "între", "la", "le", "li", "lor", "lui", "mai", "mea", "mei",
    "meu", "mult", "multa", "multe", "ne", "ni", "niste", "noastre", "noi",
    "nostru", "nu", "ori", "pana", "până", "pe", "pentru", "peste", "prea",
    "prin", "sa", "să", "sai", "sau", "se", "si", "și", "sub", "sunt",
    "suntem", "te", "ti", "toata", "toate", "tot", "toti", "tu", "un", "una",
    "unde", "unei", "unor", "unui", "va", "voi", "vom", "vor",
];

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does",
    "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i",
    "if", "in", "into", "is", "it", "its", "just", "may", "me", "might",
    "more", "most", "must", "my", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your",
];

/// Generic words that carry no cataloging value; tags built from them are
/// penalized and the frequency tier skips them.
const GENERIC: &[&str] = &[
    "content", "continut", "data", "doc", "docs", "document", "documente",
    "documents", "file", "files", "fisier", "fisiere", "info", "item",
    "items", "new", "nou", "noua", "pagina", "pagini", "page", "pages",
    "text", "texte",
];

/// Filename tokens that name tools, vendors, or revision markers rather
/// than document content.
const FILENAME_NOISE: &[&str] = &[
    "adobe", "backup", "copie", "copy", "draft", "excel", "final",
    "microsoft", "office", "powerpoint", "revised", "scan", "scanat",
    "scanned", "temp", "untitled", "version", "versiune", "word",
];

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ROMANIAN.iter().chain(ENGLISH.iter()).copied().collect()
});

static GENERIC_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| GENERIC.iter().copied().collect());

static FILENAME_NOISE_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FILENAME_NOISE.iter().copied().collect());

/// Whether a lower-cased word is a Romanian or English stop-word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Whether a lower-cased word is a generic filler (file, document, page...).
pub fn is_generic_word(word: &str) -> bool {
    GENERIC_WORDS.contains(word)
}

/// Whether a lower-cased filename token is tool/vendor/revision noise,
/// including version markers like `v2` or `v2024`.
pub fn is_filename_noise(token: &str) -> bool {
    if FILENAME_NOISE_WORDS.contains(token) {
        return true;
    }
    let mut chars = token.chars();
    chars.next() == Some('v') && token.len() > 1 && chars.all(|c| c.is_ascii_digit())
}

/// Whether a token is purely numeric.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
