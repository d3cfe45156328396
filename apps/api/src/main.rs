mod auth;
mod config;
mod db;
mod errors;
mod export;
mod extraction;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod resumes;
mod routes;
mod services;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ScorerBackend};
use crate::db::create_pool;
use crate::llm_client::{ContentGenerator, GeminiClient};
use crate::matching::scoring::{KeywordMatchScorer, LlmMatchScorer, MatchScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SuperHire API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    // Initialize S3 / MinIO
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized (bucket: {})", config.s3_bucket);

    // Model client is shared by the scorer and the resume attribute parser
    let timeout = Duration::from_secs(config.scoring_timeout_secs);
    let generator: Option<Arc<dyn ContentGenerator>> = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(key.clone(), config.gemini_api_url.clone(), timeout)?;
            info!("LLM client initialized (endpoint: {})", client.api_url());
            Some(Arc::new(client))
        }
        None => None,
    };

    let scorer: Arc<dyn MatchScorer> = match (config.scorer_backend, &generator) {
        (ScorerBackend::Llm, Some(generator)) => Arc::new(LlmMatchScorer::new(generator.clone())),
        _ => Arc::new(KeywordMatchScorer),
    };
    info!(
        "Match scorer: {} (timeout {}s)",
        scorer.backend(),
        config.scoring_timeout_secs
    );

    let state = AppState {
        db,
        s3,
        config: config.clone(),
        scorer,
        generator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "superhire-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(s3_config)
}
