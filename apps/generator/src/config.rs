use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the portfolio data source, e.g. `https://api.example.com`.
    pub data_source_host: String,
    /// Path to the résumé template document (JSON).
    pub template_path: String,
    /// Directory the populated document is written to.
    pub output_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_source_host: require_env("PORTFOLIO_API_HOST")?,
            template_path: require_env("TEMPLATE_PATH")?,
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
