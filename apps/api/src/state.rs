use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into route handlers via Axum extractors.
/// Everything here is read-only after startup; concurrent requests share
/// nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
}
