use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Minimum characters (after trimming) for resume and job-description text.
pub const DEFAULT_MIN_INPUT_CHARS: usize = 200;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub llm_model: String,
    pub port: u16,
    pub rust_log: String,
    pub min_input_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            min_input_chars: match std::env::var("MIN_INPUT_CHARS") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MIN_INPUT_CHARS must be a non-negative integer")?,
                Err(_) => DEFAULT_MIN_INPUT_CHARS,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
