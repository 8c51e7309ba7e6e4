//! Axum route handlers for the Resume Analysis API.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::fuzzy::FuzzyParams;
use crate::analysis::scoring::analyze;
use crate::analysis::store::{get_analysis, insert_analysis, recent_analyses};
use crate::analysis::suggest::SkillSuggestions;
use crate::errors::AppError;
use crate::models::analysis::AnalysisRow;
use crate::pdf;
use crate::state::AppState;

const PREVIEW_LIMIT: usize = 1000;
const RECENT_LIMIT: i64 = 20;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub id: Uuid,
    /// First portion of the extracted résumé text.
    pub resume_preview: String,
    pub match_score: u32,
    pub skills_detected: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub summary: String,
    pub improvements: String,
    pub job_suggestions: Vec<String>,
}

/// POST /api/v1/resume/analyze
/// Accepts a PDF résumé (file part `resume`) and a `job_description` text
/// part, extracts the text, and returns the reconciled analysis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    let mut resume_filename = String::new();
    let mut resume_content_type = String::new();
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                resume_filename = field.file_name().unwrap_or_default().to_string();
                resume_content_type = field.content_type().unwrap_or_default().to_string();
                resume_bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read uploaded file: {e}"))
                })?);
            }
            "job_description" => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job_description: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let bytes =
        resume_bytes.ok_or_else(|| AppError::Validation("resume file part is required".into()))?;
    let job_description = job_description.unwrap_or_default();

    // Content-type is client-controlled and sometimes absent; accept either
    // a pdf content type or a .pdf filename before checking the bytes.
    let looks_like_pdf = resume_content_type.to_lowercase().contains("pdf")
        || resume_filename.to_lowercase().ends_with(".pdf");
    if !looks_like_pdf {
        return Err(AppError::Validation("Only PDF files are allowed.".into()));
    }
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty.".into()));
    }
    if bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Uploaded file is too large. Max allowed size is {} MB.",
            state.config.max_upload_bytes / (1024 * 1024)
        )));
    }
    if !pdf::is_pdf(&bytes) {
        return Err(AppError::UnprocessableEntity(
            "Uploaded file does not appear to be a valid PDF.".into(),
        ));
    }

    let resume_text = pdf::extract_text(&bytes).map_err(|e| {
        warn!("PDF extraction failed: {e}");
        AppError::UnprocessableEntity(
            "Unable to extract text from PDF. Try uploading a text-based PDF.".into(),
        )
    })?;

    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description form field is required and cannot be empty.".into(),
        ));
    }

    // AI collaborator — a failure degrades to the empty payload so the
    // lexical pipeline still answers.
    let ai = match state
        .suggester
        .suggest(&resume_text, &job_description)
        .await
    {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Skill suggester failed, continuing without AI contribution: {e}");
            SkillSuggestions::default()
        }
    };

    let fuzzy = FuzzyParams {
        max_ngram: state.config.fuzzy_max_ngram,
        cutoff: state.config.fuzzy_cutoff,
    };
    let report = analyze(&resume_text, &job_description, &ai, &state.catalog, &fuzzy);

    let id = insert_analysis(&state.db, &resume_text, &job_description, &report)
        .await
        .map_err(AppError::Internal)?;

    info!(
        "Analysis {id} complete: score={} matched={} missing={}",
        report.score,
        report.matched_skills.len(),
        report.missing_skills.len()
    );

    Ok(Json(AnalyzeResponse {
        id,
        resume_preview: preview(&resume_text),
        match_score: report.score,
        skills_detected: report.skills_detected,
        matched_skills: report.matched_skills,
        missing_skills: report.missing_skills,
        summary: report.summary,
        improvements: report.improvements,
        job_suggestions: report.job_suggestions,
    }))
}

/// GET /api/v1/resume/analyses
pub async fn handle_recent_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisRow>>, AppError> {
    let rows = recent_analyses(&state.db, RECENT_LIMIT)
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(rows))
}

/// GET /api/v1/resume/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRow>, AppError> {
    let row = get_analysis(&state.db, id)
        .await
        .map_err(AppError::Internal)?;
    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}

/// Char-boundary-safe preview of the extracted text.
fn preview(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(PREVIEW_LIMIT) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}…", text[..byte_idx].trim_end()),
    }
}
