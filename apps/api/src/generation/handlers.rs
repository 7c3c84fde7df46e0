//! Axum route handler for the generation endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::prompts::{compose_prompt, GENERATION_SYSTEM};
use crate::registry;
use crate::state::AppState;

/// Incoming body for `POST /api/generate`. Both fields are optional at the
/// serde level so that absence surfaces as a 400 validation error with the
/// flat error shape, not as an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}

/// POST /api/generate
///
/// Validates the request, resolves the content type against the registry,
/// and relays the composed prompt to the generation provider. Strictly
/// linear and stateless: one outbound call per request, no retries.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let key = request
        .content_type
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AppError::Validation("type is required".to_string()))?;

    let content = request
        .content
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::Validation("content is required".to_string()))?;

    debug!("generation request: type={key}, content length={}", content.len());

    // Unknown keys are rejected before any outbound call is attempted.
    let content_type = registry::find(key).ok_or(AppError::UnknownType)?;

    // Deployment precondition, not a per-request condition.
    if state.config.deepseek_api_key.is_none() {
        return Err(AppError::Configuration);
    }

    let prompt = compose_prompt(content_type.instruction, content);

    let text = state.llm.generate(GENERATION_SYSTEM, &prompt).await?;

    info!("generated {} chars for type {key}", text.len());

    Ok(Json(GenerateResponse { text }))
}
