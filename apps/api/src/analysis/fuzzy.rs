//! Fuzzy Matcher — n-gram approximate fallback for the job description.
//!
//! Invoked only when exact matching (plus validated AI suggestions) finds
//! nothing in the JD. Tokenizes the text, builds contiguous token n-grams,
//! and accepts the best-scoring catalog candidate per n-gram when its
//! similarity clears the cutoff.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use strsim::{jaro_winkler, normalized_levenshtein};

use crate::analysis::catalog::{normalize_skill, SkillCatalog};

/// Everything except word characters, whitespace, and `+ # . -` is stripped
/// before tokenization, preserving tokens like "c++" and "node.js".
static TOKEN_STRIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s+#.\-]").expect("token strip regex is valid"));

/// Tuning knobs for the fuzzy fallback.
#[derive(Debug, Clone)]
pub struct FuzzyParams {
    /// Largest token window used when building n-grams.
    pub max_ngram: usize,
    /// Minimum similarity ratio required to accept an approximate match.
    pub cutoff: f64,
}

impl Default for FuzzyParams {
    fn default() -> Self {
        Self {
            max_ngram: 3,
            cutoff: 0.78,
        }
    }
}

/// Similarity ratio in [0, 1]; symmetric in its arguments.
///
/// Blend of normalized Levenshtein and Jaro-Winkler, weighted toward
/// Jaro-Winkler, which tolerates the transposition typos this fallback
/// exists to catch ("pyhton", "kubernetis").
pub fn similarity(a: &str, b: &str) -> f64 {
    0.4 * normalized_levenshtein(a, b) + 0.6 * jaro_winkler(a, b)
}

fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_STRIP
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn ngrams(tokens: &[String], max_ngram: usize) -> BTreeSet<String> {
    let mut grams = BTreeSet::new();
    for n in 1..=max_ngram {
        if n > tokens.len() {
            break;
        }
        for window in tokens.windows(n) {
            grams.insert(window.join(" "));
        }
    }
    grams
}

/// Approximate catalog matching over token n-grams.
///
/// Each n-gram that exactly equals a catalog term (lowercased) is accepted
/// directly; otherwise the single best-scoring catalog candidate is accepted
/// iff its similarity meets the cutoff. Ties between equally-scored
/// candidates resolve to the earlier catalog term: the scan replaces the
/// running best only on a strictly greater score. Identical input text and
/// parameters always yield the identical output set.
pub fn extract_skills_fuzzy(
    text: &str,
    catalog: &SkillCatalog,
    params: &FuzzyParams,
) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    if text.is_empty() {
        return found;
    }

    let tokens = tokenize(text);

    for gram in ngrams(&tokens, params.max_ngram) {
        // Exact quick check first.
        if catalog.contains_lower(&gram) {
            found.insert(normalize_skill(&gram));
            continue;
        }

        let mut best: Option<(&str, f64)> = None;
        for term in catalog.terms() {
            let score = similarity(&gram, term.lower());
            if score >= params.cutoff && best.map_or(true, |(_, s)| score > s) {
                best = Some((term.display(), score));
            }
        }
        if let Some((display, _)) = best {
            found.insert(display.to_string());
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SkillCatalog {
        SkillCatalog::with_defaults()
    }

    fn params() -> FuzzyParams {
        FuzzyParams::default()
    }

    #[test]
    fn test_default_params() {
        let p = FuzzyParams::default();
        assert_eq!(p.max_ngram, 3);
        assert!((p.cutoff - 0.78).abs() < f64::EPSILON);
    }

    #[test]
    fn test_similarity_is_symmetric_and_bounded() {
        let pairs = [("pyhton", "python"), ("kubernetis", "kubernetes"), ("a", "zz")];
        for (a, b) in pairs {
            let forward = similarity(a, b);
            let backward = similarity(b, a);
            assert!((forward - backward).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&forward));
        }
        assert!((similarity("rust", "rust") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_typo_clears_default_cutoff() {
        assert!(similarity("pyhton", "python") >= 0.78);
        assert!(similarity("kubernetis", "kubernetes") >= 0.78);
    }

    #[test]
    fn test_tokenize_strips_punctuation_keeps_symbol_chars() {
        let tokens = tokenize("C++, Node.js & (SQL)!");
        assert_eq!(tokens, vec!["c++", "node.js", "sql"]);
    }

    #[test]
    fn test_ngrams_window_sizes() {
        let tokens = tokenize("deep learning models");
        let grams = ngrams(&tokens, 3);
        assert!(grams.contains("deep"));
        assert!(grams.contains("deep learning"));
        assert!(grams.contains("deep learning models"));
        assert!(!grams.contains("learning deep"));
    }

    #[test]
    fn test_ngrams_window_larger_than_token_count() {
        let tokens = tokenize("rust");
        let grams = ngrams(&tokens, 3);
        assert_eq!(grams.len(), 1);
    }

    #[test]
    fn test_empty_text_returns_empty_set() {
        assert!(extract_skills_fuzzy("", &catalog(), &params()).is_empty());
    }

    #[test]
    fn test_typo_recovers_catalog_skill() {
        let found = extract_skills_fuzzy("strong pyhton background", &catalog(), &params());
        assert!(found.contains("Python"), "got {found:?}");
    }

    #[test]
    fn test_kubernetes_typo_recovers() {
        let found = extract_skills_fuzzy("kubernetis clusters at scale", &catalog(), &params());
        assert!(found.contains("Kubernetes"), "got {found:?}");
    }

    #[test]
    fn test_exact_ngram_accepted_directly() {
        let found = extract_skills_fuzzy("Machine Learning", &catalog(), &params());
        assert!(found.contains("Machine Learning"));
    }

    #[test]
    fn test_cutoff_of_one_rejects_near_misses() {
        let strict = FuzzyParams {
            max_ngram: 3,
            cutoff: 1.0,
        };
        let found = extract_skills_fuzzy("strong pyhton background", &catalog(), &strict);
        assert!(!found.contains("Python"));
    }

    #[test]
    fn test_deterministic_across_runs() {
        let text = "kubernetis, pyhton and reactt experiance";
        let first = extract_skills_fuzzy(text, &catalog(), &params());
        let second = extract_skills_fuzzy(text, &catalog(), &params());
        assert_eq!(first, second);
    }

    #[test]
    fn test_tie_breaks_to_earlier_catalog_term() {
        // Both candidates score identically against the probe; the first
        // catalog entry must win regardless of score equality.
        let tied = SkillCatalog::new(["ocaml", "ocamt"]);
        let p = FuzzyParams {
            max_ngram: 1,
            cutoff: 0.5,
        };
        let found = extract_skills_fuzzy("ocamx", &tied, &p);
        // similarity("ocamx", "ocaml") == similarity("ocamx", "ocamt"):
        // same edit profile, same shared prefix.
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["Ocaml"]);
    }
}
