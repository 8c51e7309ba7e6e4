use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Upload size cap for the résumé PDF.
    pub max_upload_bytes: usize,
    /// Largest token window for the fuzzy fallback matcher.
    pub fuzzy_max_ngram: usize,
    /// Minimum similarity ratio for a fuzzy match.
    pub fuzzy_cutoff: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            fuzzy_max_ngram: std::env::var("FUZZY_MAX_NGRAM")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<usize>()
                .context("FUZZY_MAX_NGRAM must be a positive integer")?,
            fuzzy_cutoff: std::env::var("FUZZY_CUTOFF")
                .unwrap_or_else(|_| "0.78".to_string())
                .parse::<f64>()
                .context("FUZZY_CUTOFF must be a ratio between 0 and 1")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
