// All LLM prompt constants for the Analysis module.
// The suggester output is validated against the source text afterwards, so
// the prompt leans hard on "only skills that literally appear".

/// System prompt for skill suggestion — enforces JSON-only output.
pub const SUGGESTION_SYSTEM: &str =
    "You are an expert technical recruiter analyzing a résumé against a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Suggestion prompt template. Replace `{resume_text}` and `{jd_text}`
/// before sending.
pub const SUGGESTION_PROMPT_TEMPLATE: &str = r#"Analyze the résumé and the job description below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "resume_skills": ["Python", "Docker"],
  "jd_skills": ["Python", "Kubernetes"],
  "summary": "Two-sentence summary of the candidate.",
  "improvements": "Two or three concrete suggestions to improve the résumé for this job."
}

Rules:
- resume_skills: technical skills that LITERALLY APPEAR in the résumé text. Do not infer skills that are not written there.
- jd_skills: technical skills that LITERALLY APPEAR in the job description text. Do not infer.
- Use the skill's surface form from the text (e.g. "node.js", "CI/CD") — casing does not matter.
- summary: short, factual, grounded in the résumé only.
- improvements: actionable wording, tied to gaps between the two documents.

RÉSUMÉ:
{resume_text}

JOB DESCRIPTION:
{jd_text}"#;
