//! Cache-key derivation.

/// Separates key parts; unlikely to appear in document text.
const DELIMITER: char = '\u{1f}';

/// Derive a short cache token from the normalized call inputs.
///
/// Joins `(operation, text, file_name, catalog_size)` and reduces with a
/// rolling multiplicative hash. Collisions are possible but accepted: a
/// stale hit only repeats a previously valid suggestion.
pub fn cache_key(operation: &str, text: &str, file_name: &str, catalog_size: usize) -> String {
    let joined = format!(
        "{operation}{DELIMITER}{text}{DELIMITER}{file_name}{DELIMITER}{catalog_size}"
    );

    let mut hash: u64 = 0;
    for byte in joined.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(byte as u64);
    }
    format!("{hash:016x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_stable() {
        let a = cache_key("keywords", "contract de servicii", "a.pdf", 0);
        let b = cache_key("keywords", "contract de servicii", "a.pdf", 0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn test_key_varies_with_each_input() {
        let base = cache_key("tags", "text", "f.pdf", 4);
        assert_ne!(base, cache_key("keywords", "text", "f.pdf", 4));
        assert_ne!(base, cache_key("tags", "other", "f.pdf", 4));
        assert_ne!(base, cache_key("tags", "text", "g.pdf", 4));
        assert_ne!(base, cache_key("tags", "text", "f.pdf", 5));
    }

    #[test]
    fn test_delimiter_prevents_field_bleed() {
        // "ab" + "c" must not collide with "a" + "bc".
        assert_ne!(
            cache_key("op", "ab", "c", 0),
            cache_key("op", "a", "bc", 0)
        );
    }
}
