//! Persistence for completed analyses.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::analysis::scoring::AnalysisReport;
use crate::models::analysis::AnalysisRow;

/// Records a completed analysis and returns the new row id.
pub async fn insert_analysis(
    pool: &PgPool,
    resume_text: &str,
    job_description: &str,
    report: &AnalysisReport,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO resume_analyses
            (id, resume_text, job_description, match_score,
             skills_detected, matched_skills, missing_skills)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind(resume_text)
    .bind(job_description)
    .bind(report.score as i32)
    .bind(&report.skills_detected)
    .bind(&report.matched_skills)
    .bind(&report.missing_skills)
    .execute(pool)
    .await?;
    Ok(id)
}

pub async fn get_analysis(pool: &PgPool, id: Uuid) -> Result<Option<AnalysisRow>> {
    let row = sqlx::query_as("SELECT * FROM resume_analyses WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Most recent analyses, newest first.
pub async fn recent_analyses(pool: &PgPool, limit: i64) -> Result<Vec<AnalysisRow>> {
    let rows = sqlx::query_as("SELECT * FROM resume_analyses ORDER BY created_at DESC LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
