use anyhow::{Context, Result};

/// Application configuration loaded from environment variables once at
/// process start and carried in `AppState` — no lazily-initialized globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the generation provider. Optional at startup so the
    /// pages still serve; generation requests fail with a configuration
    /// error until it is set.
    pub deepseek_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            deepseek_api_key: std::env::var("DEEPSEEK_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
