use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::ContentGenerator;
use crate::matching::scoring::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub config: Config,
    /// Pluggable scorer. `LlmMatchScorer` when an API key is configured, else `KeywordMatchScorer`.
    pub scorer: Arc<dyn MatchScorer>,
    /// Model client for resume attribute parsing; `None` runs the heuristic parser only.
    pub generator: Option<Arc<dyn ContentGenerator>>,
}

impl AppState {
    pub fn scoring_timeout(&self) -> Duration {
        Duration::from_secs(self.config.scoring_timeout_secs)
    }

    pub fn generator(&self) -> Option<&dyn ContentGenerator> {
        self.generator.as_deref()
    }
}
