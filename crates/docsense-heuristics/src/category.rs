//! Coarse document category classification by synonym-keyword lookup.

/// Category synonym table (Romanian + English). `budget` participates in
/// tag-relevance scoring but is not a classifier label.
pub(crate) const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    (
        "contract",
        &[
            "contract", "contracte", "contractul", "acord", "agreement",
            "conventie", "convenție", "clauza", "clause",
        ],
    ),
    (
        "financial",
        &[
            "factura", "factură", "facturi", "invoice", "plata", "plată",
            "payment", "suma", "tva", "vat",
        ],
    ),
    (
        "report",
        &[
            "raport", "rapoarte", "report", "analiza", "analiză", "analysis",
            "situatie", "statistici",
        ],
    ),
    (
        "certificate",
        &[
            "certificat", "certificate", "diploma", "atestat", "adeverinta",
            "adeverință",
        ],
    ),
    (
        "policy",
        &[
            "politica", "politică", "policy", "regulament", "regulation",
            "procedura", "procedură", "procedure", "norme",
        ],
    ),
    (
        "manual",
        &[
            "manual", "ghid", "guide", "instructiuni", "instrucțiuni",
            "instructions", "tutorial",
        ],
    ),
    (
        "presentation",
        &["prezentare", "prezentari", "presentation", "slide", "slideshow"],
    ),
    (
        "budget",
        &[
            "buget", "bugete", "budget", "costuri", "costs", "cheltuieli",
            "expenses", "estimare",
        ],
    ),
];

/// Classifier labels in priority order; the first category with at least
/// one synonym hit wins.
const CLASSIFIER_ORDER: &[&str] = &[
    "contract",
    "financial",
    "report",
    "certificate",
    "policy",
    "manual",
    "presentation",
];

pub(crate) fn synonyms_for(category: &str) -> &'static [&'static str] {
    CATEGORY_TABLE
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or(&[])
}

/// Classify a document into a coarse category from its text and filename.
///
/// Returns `"general"` when no synonym list matches.
pub fn classify(text: &str, file_name: &str) -> String {
    let haystack = format!("{} {}", text, file_name).to_lowercase();

    for &category in CLASSIFIER_ORDER {
        if synonyms_for(category)
            .iter()
            .any(|synonym| haystack.contains(synonym))
        {
            return category.to_string();
        }
    }
    "general".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default() {
        assert_eq!(classify("", ""), "general");
        assert_eq!(classify("lorem ipsum dolor sit amet", ""), "general");
    }

    #[test]
    fn test_classify_contract() {
        let text = "Prezentul contract de prestari servicii se incheie intre parti";
        assert_eq!(classify(text, ""), "contract");
    }

    #[test]
    fn test_classify_from_filename_only() {
        assert_eq!(classify("", "Factura_114.pdf"), "financial");
    }

    #[test]
    fn test_priority_order() {
        // Contract synonyms outrank financial ones regardless of position.
        let text = "factura anexata la contract";
        assert_eq!(classify(text, ""), "contract");
    }

    #[test]
    fn test_classify_english() {
        assert_eq!(classify("Quarterly sales report and analysis", ""), "report");
        assert_eq!(classify("Employee handbook guide", ""), "manual");
    }

    #[test]
    fn test_budget_not_a_label() {
        // Budget keywords participate in scoring only.
        assert_eq!(classify("bugetul pe anul curent", ""), "general");
    }
}
