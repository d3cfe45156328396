use anyhow::{bail, Context, Result};

pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Which `MatchScorer` backend the server runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerBackend {
    Llm,
    Keyword,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub jwt_secret: String,
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub scoring_timeout_secs: u64,
    pub scorer_backend: ScorerBackend,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_api_key = optional_env("GEMINI_API_KEY");
        let scorer_backend = parse_backend(
            optional_env("SCORER_BACKEND").as_deref(),
            gemini_api_key.is_some(),
        )?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            jwt_secret: require_env("JWT_SECRET")?,
            gemini_api_key,
            gemini_api_url: optional_env("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            scoring_timeout_secs: optional_env("SCORING_TIMEOUT_SECS")
                .unwrap_or_else(|| "8".to_string())
                .parse::<u64>()
                .context("SCORING_TIMEOUT_SECS must be a whole number of seconds")?,
            scorer_backend,
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|| (10 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Resolves the scorer backend. Without an API key only the keyword backend can run.
fn parse_backend(raw: Option<&str>, has_api_key: bool) -> Result<ScorerBackend> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") => Ok(if has_api_key {
            ScorerBackend::Llm
        } else {
            ScorerBackend::Keyword
        }),
        Some("keyword") => Ok(ScorerBackend::Keyword),
        Some("llm") if has_api_key => Ok(ScorerBackend::Llm),
        Some("llm") => bail!("SCORER_BACKEND=llm requires GEMINI_API_KEY to be set"),
        Some(other) => bail!("Unknown SCORER_BACKEND '{other}' (expected 'llm' or 'keyword')"),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
