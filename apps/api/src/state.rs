use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::catalog::SkillCatalog;
use crate::analysis::suggest::SkillSuggester;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Read-only skill vocabulary, built once at startup and never mutated.
    pub catalog: Arc<SkillCatalog>,
    /// Pluggable AI suggestion collaborator. Default: LlmSkillSuggester.
    pub suggester: Arc<dyn SkillSuggester>,
}
