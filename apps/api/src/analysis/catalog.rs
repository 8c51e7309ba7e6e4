//! Skill Catalog — the static reference vocabulary of known skill terms.
//!
//! Built once at startup and shared read-only across all analysis requests
//! (`Arc<SkillCatalog>` in `AppState`). Never mutated after construction.

/// Raw skill keywords recognized by the lexical matchers.
/// Lowercase surface forms; symbol-bearing tokens ("c++", "node.js", "ci/cd")
/// stay intact so substring and n-gram matching can see them.
pub const DEFAULT_SKILL_KEYWORDS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "c#",
    "go",
    "rust",
    "typescript",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "spring",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "git",
    "ci/cd",
    "jenkins",
    "gitlab",
    "github",
    "devops",
    "machine learning",
    "deep learning",
    "nlp",
    "tensorflow",
    "pytorch",
    "rest api",
    "graphql",
    "microservices",
    "agile",
    "scrum",
];

/// Canonical display form of a skill string: trimmed, then title-cased.
///
/// Title-casing uppercases every letter that follows a non-letter and
/// lowercases the rest, so "sql" → "Sql", "machine learning" →
/// "Machine Learning", "node.js" → "Node.Js", "c++" → "C++".
/// Idempotent; the normalized form is the uniqueness key for skill-set
/// membership throughout the pipeline.
pub fn normalize_skill(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut prev_is_letter = false;

    for c in trimmed.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

/// A single catalog entry with its precomputed lookup forms.
#[derive(Debug, Clone)]
pub struct SkillTerm {
    lower: String,
    display: String,
}

impl SkillTerm {
    fn new(raw: &str) -> Self {
        Self {
            lower: raw.trim().to_lowercase(),
            display: normalize_skill(raw),
        }
    }

    /// Lowercase surface form used by the matchers.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Normalized display form used as the set-membership key.
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// Ordered, immutable set of known skill terms.
///
/// Iteration order is construction order; the fuzzy matcher relies on it for
/// deterministic tie-breaking between equally-scored candidates.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    terms: Vec<SkillTerm>,
}

impl SkillCatalog {
    /// Builds a catalog from raw keywords, dropping empty entries and
    /// case-insensitive duplicates (first occurrence wins).
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<SkillTerm> = Vec::new();
        for keyword in keywords {
            let term = SkillTerm::new(keyword.as_ref());
            if term.lower.is_empty() {
                continue;
            }
            if terms.iter().any(|t| t.lower == term.lower) {
                continue;
            }
            terms.push(term);
        }
        Self { terms }
    }

    /// The built-in vocabulary.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_SKILL_KEYWORDS.iter().copied())
    }

    pub fn terms(&self) -> &[SkillTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Exact lowercase lookup, used by the fuzzy matcher's quick check.
    pub fn contains_lower(&self, needle: &str) -> bool {
        self.terms.iter().any(|t| t.lower == needle)
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
