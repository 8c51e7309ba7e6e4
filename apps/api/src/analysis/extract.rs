//! Exact Matcher — substring detection of catalog terms in free text.

use std::collections::BTreeSet;

use crate::analysis::catalog::SkillCatalog;

/// Returns the normalized catalog terms whose lowercase raw form occurs as a
/// substring of the lowercased text. Empty text yields an empty set, never
/// an error.
///
/// Matching is substring-based with no word-boundary check: a short term can
/// fire inside a longer unrelated word (catalog "go" inside "django" or
/// "algorithm"). Known false-positive source, preserved deliberately — see
/// DESIGN.md.
pub fn extract_skills(text: &str, catalog: &SkillCatalog) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    if text.is_empty() {
        return found;
    }

    let text_lower = text.to_lowercase();
    for term in catalog.terms() {
        if text_lower.contains(term.lower()) {
            found.insert(term.display().to_string());
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::normalize_skill;

    fn catalog() -> SkillCatalog {
        SkillCatalog::with_defaults()
    }

    #[test]
    fn test_empty_text_returns_empty_set() {
        assert!(extract_skills("", &catalog()).is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let upper = extract_skills("We use PYTHON daily", &catalog());
        let lower = extract_skills("We use python daily", &catalog());
        assert_eq!(upper, lower);
        assert!(upper.contains("Python"));
    }

    #[test]
    fn test_results_are_subset_of_normalized_catalog() {
        let text = "Python, React, Docker, Kubernetes, and a pinch of SQL";
        let found = extract_skills(text, &catalog());
        for skill in &found {
            assert!(
                catalog().terms().iter().any(|t| t.display() == skill),
                "{skill} is not a catalog term"
            );
            assert_eq!(&normalize_skill(skill), skill);
        }
        assert!(found.len() >= 5);
    }

    #[test]
    fn test_symbol_tokens_match() {
        let found = extract_skills("Fluent in C++ and Node.js", &catalog());
        assert!(found.contains("C++"));
        assert!(found.contains("Node.Js"));
    }

    #[test]
    fn test_multi_word_terms_match() {
        let found = extract_skills("background in machine learning systems", &catalog());
        assert!(found.contains("Machine Learning"));
    }

    #[test]
    fn test_substring_false_positive_is_accepted() {
        // "go" fires inside "algorithm" — the documented limitation.
        let found = extract_skills("wrote an algorithm", &catalog());
        assert!(found.contains("Go"));
    }

    #[test]
    fn test_no_catalog_terms_yields_empty_set() {
        let found = extract_skills("fond of watercolor painting", &catalog());
        assert!(found.is_empty());
    }

    #[test]
    fn test_output_is_sorted() {
        let found = extract_skills("sql, react, python", &catalog());
        let listed: Vec<&String> = found.iter().collect();
        let mut sorted = listed.clone();
        sorted.sort();
        assert_eq!(listed, sorted);
    }
}
