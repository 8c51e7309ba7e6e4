use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the analysis table when missing, so a fresh database needs no
/// manual migration step.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resume_analyses (
            id UUID PRIMARY KEY,
            resume_text TEXT NOT NULL,
            job_description TEXT NOT NULL,
            match_score INTEGER NOT NULL,
            skills_detected TEXT[] NOT NULL DEFAULT '{}',
            matched_skills TEXT[] NOT NULL DEFAULT '{}',
            missing_skills TEXT[] NOT NULL DEFAULT '{}',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema ensured");
    Ok(())
}
