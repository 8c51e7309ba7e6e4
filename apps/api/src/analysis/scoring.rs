//! Score Reconciler — merges exact, fuzzy, and validated AI skill sets per
//! document and derives a single deterministic match score.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::catalog::SkillCatalog;
use crate::analysis::extract::extract_skills;
use crate::analysis::fuzzy::{extract_skills_fuzzy, FuzzyParams};
use crate::analysis::jobs::suggest_jobs;
use crate::analysis::suggest::{validate_suggestions, SkillSuggestions};

/// Final output of one analysis request. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Percentage of JD skills covered by the résumé, 0–100. Zero when the
    /// JD yields no skills at all — no basis for comparison, not an error.
    pub score: u32,
    /// All skills resolved for the résumé (exact ∪ validated AI), sorted.
    pub skills_detected: Vec<String>,
    /// résumé ∩ JD, over normalized forms.
    pub matched_skills: Vec<String>,
    /// JD − résumé, over normalized forms.
    pub missing_skills: Vec<String>,
    pub summary: String,
    pub improvements: String,
    pub job_suggestions: Vec<String>,
}

/// Runs the full reconciliation pipeline over already-extracted text.
///
/// Pure and synchronous: the AI payload must be resolved by the caller
/// beforehand (substitute `SkillSuggestions::default()` when the
/// collaborator call failed). Deterministic for identical inputs and
/// parameters.
pub fn analyze(
    resume_text: &str,
    jd_text: &str,
    ai: &SkillSuggestions,
    catalog: &SkillCatalog,
    fuzzy: &FuzzyParams,
) -> AnalysisReport {
    // 1) Strict local keyword extraction on both documents.
    let resume_local = extract_skills(resume_text, catalog);
    let jd_local = extract_skills(jd_text, catalog);

    // 2) AI suggestions, kept only where grounded in their source text.
    let ai_resume = validate_suggestions(&ai.resume_skills, resume_text);
    let ai_jd = validate_suggestions(&ai.jd_skills, jd_text);

    // 3) Union per document.
    let resume_skills: BTreeSet<String> = resume_local.union(&ai_resume).cloned().collect();
    let mut jd_skills: BTreeSet<String> = jd_local.union(&ai_jd).cloned().collect();

    // 4) Fuzzy fallback, only when the JD yielded nothing at all. Validated
    //    AI suggestions stay in the union.
    if jd_skills.is_empty() {
        let jd_fuzzy = extract_skills_fuzzy(jd_text, catalog, fuzzy);
        if !jd_fuzzy.is_empty() {
            jd_skills = jd_fuzzy.union(&ai_jd).cloned().collect();
        }
    }

    // 5) Matched / missing over normalized forms.
    let matched: BTreeSet<String> = resume_skills.intersection(&jd_skills).cloned().collect();
    let missing: BTreeSet<String> = jd_skills.difference(&resume_skills).cloned().collect();

    // 6) Rounded percentage of JD skills covered; no denominator → 0.
    let score = if jd_skills.is_empty() {
        0
    } else {
        ((matched.len() as f64 / jd_skills.len() as f64) * 100.0).round() as u32
    };

    let job_suggestions = suggest_jobs(&resume_skills);

    AnalysisReport {
        score,
        skills_detected: resume_skills.into_iter().collect(),
        matched_skills: matched.into_iter().collect(),
        missing_skills: missing.into_iter().collect(),
        summary: ai.summary.clone(),
        improvements: ai.improvements.clone(),
        job_suggestions,
    }
}
