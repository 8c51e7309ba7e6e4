//! AI Suggestion boundary — typed payload, the pluggable suggester seam, and
//! the validator that grounds external suggestions in their source text.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::catalog::normalize_skill;
use crate::analysis::prompts::{SUGGESTION_PROMPT_TEMPLATE, SUGGESTION_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Structured payload from the external AI collaborator.
///
/// Every field is serde-defaulted: a partial response degrades to empty
/// contributions instead of an error. A response of the wrong shape fails
/// deserialization inside the suggester, and the caller substitutes
/// `SkillSuggestions::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSuggestions {
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub jd_skills: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub improvements: String,
}

/// The AI suggestion seam. Implement this to swap the backend without
/// touching the pipeline or handlers; carried in `AppState` as
/// `Arc<dyn SkillSuggester>` so tests can inject deterministic stand-ins.
#[async_trait]
pub trait SkillSuggester: Send + Sync {
    async fn suggest(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<SkillSuggestions, AppError>;
}

/// Production suggester backed by the shared LLM client.
pub struct LlmSkillSuggester {
    llm: LlmClient,
}

impl LlmSkillSuggester {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SkillSuggester for LlmSkillSuggester {
    async fn suggest(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<SkillSuggestions, AppError> {
        let prompt = SUGGESTION_PROMPT_TEMPLATE
            .replace("{resume_text}", resume_text)
            .replace("{jd_text}", jd_text);
        self.llm
            .call_json::<SkillSuggestions>(&prompt, SUGGESTION_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Skill suggestion failed: {e}")))
    }
}

/// Filters externally-suggested skills down to those verifiably present in
/// the text they claim to come from — the guard against the generator
/// hallucinating skills not grounded in the input.
///
/// A suggestion survives when its trimmed lowercase form occurs as a
/// substring of the lowercase source text. Returns normalized forms,
/// deduplicated.
pub fn validate_suggestions(suggested: &[String], source_text: &str) -> BTreeSet<String> {
    let mut kept = BTreeSet::new();
    if source_text.is_empty() {
        return kept;
    }

    let text_lower = source_text.to_lowercase();
    for raw in suggested {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            continue;
        }
        if text_lower.contains(&needle) {
            kept.insert(normalize_skill(raw));
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grounded_suggestion_is_kept() {
        let kept = validate_suggestions(
            &["Python".to_string()],
            "Five years of python development",
        );
        assert!(kept.contains("Python"));
    }

    #[test]
    fn test_hallucinated_suggestion_is_dropped() {
        let kept = validate_suggestions(
            &["Kubernetes".to_string()],
            "Five years of python development",
        );
        assert!(kept.is_empty());
    }

    #[test]
    fn test_validation_is_case_insensitive() {
        let kept = validate_suggestions(&["PYTHON".to_string()], "knows Python well");
        assert!(kept.contains("Python"));
    }

    #[test]
    fn test_suggestions_are_trimmed_before_lookup() {
        let kept = validate_suggestions(&["  sql  ".to_string()], "strong SQL skills");
        assert!(kept.contains("Sql"));
    }

    #[test]
    fn test_empty_source_text_keeps_nothing() {
        let kept = validate_suggestions(&["Python".to_string()], "");
        assert!(kept.is_empty());
    }

    #[test]
    fn test_blank_suggestions_are_skipped() {
        let kept = validate_suggestions(&["".to_string(), "   ".to_string()], "some text");
        assert!(kept.is_empty());
    }

    #[test]
    fn test_duplicates_collapse_to_one_normalized_form() {
        let kept = validate_suggestions(
            &["python".to_string(), "PYTHON".to_string(), " Python ".to_string()],
            "python everywhere",
        );
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_non_catalog_skills_pass_when_grounded() {
        // The validator checks presence in the text, not catalog membership.
        let kept = validate_suggestions(&["Teamwork".to_string()], "values teamwork deeply");
        assert!(kept.contains("Teamwork"));
    }

    #[test]
    fn test_payload_missing_fields_defaults_to_empty() {
        let payload: SkillSuggestions = serde_json::from_str("{}").unwrap();
        assert!(payload.resume_skills.is_empty());
        assert!(payload.jd_skills.is_empty());
        assert!(payload.summary.is_empty());
        assert!(payload.improvements.is_empty());
    }

    #[test]
    fn test_payload_partial_fields_deserialize() {
        let payload: SkillSuggestions =
            serde_json::from_str(r#"{"resume_skills": ["Rust"], "summary": "fine"}"#).unwrap();
        assert_eq!(payload.resume_skills, vec!["Rust"]);
        assert!(payload.jd_skills.is_empty());
        assert_eq!(payload.summary, "fine");
    }

    #[test]
    fn test_payload_wrong_shape_is_a_parse_error() {
        // A list where an object is expected must fail, not coerce.
        assert!(serde_json::from_str::<SkillSuggestions>(r#"["Rust"]"#).is_err());
    }

    struct CannedSuggester(SkillSuggestions);

    #[async_trait]
    impl SkillSuggester for CannedSuggester {
        async fn suggest(&self, _: &str, _: &str) -> Result<SkillSuggestions, AppError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_trait_object_stand_in() {
        let canned = CannedSuggester(SkillSuggestions {
            resume_skills: vec!["Rust".to_string()],
            ..Default::default()
        });
        let suggester: std::sync::Arc<dyn SkillSuggester> = std::sync::Arc::new(canned);
        let payload = suggester.suggest("resume", "jd").await.unwrap();
        assert_eq!(payload.resume_skills, vec!["Rust"]);
    }
}
