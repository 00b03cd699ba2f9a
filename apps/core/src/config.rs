use anyhow::{Context, Result};

/// Default job API endpoint (kie.ai jobs API).
pub const DEFAULT_API_BASE_URL: &str = "https://api.kie.ai/api/v1/jobs";
/// Default delay between status polls.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2_000;
/// Default wall-clock budget for one generation run.
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 300_000;

/// Client configuration loaded from environment variables.
/// Only `KIE_API_KEY` is required; everything else has a sane default.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base_url: String,
    pub poll_interval_ms: u64,
    pub poll_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: require_env("KIE_API_KEY")?,
            api_base_url: std::env::var("KIE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            poll_interval_ms: env_u64("POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS)?,
            poll_timeout_ms: env_u64("POLL_TIMEOUT_MS", DEFAULT_POLL_TIMEOUT_MS)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("'{key}' must be a non-negative integer")),
        Err(_) => Ok(default),
    }
}
