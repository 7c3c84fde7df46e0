use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Wire shape is the flat `{"error": string, "details"?: object}` contract the
/// frontend expects — the error string is rendered inline in the form view.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid type")]
    UnknownType,

    #[error("API key not configured")]
    Configuration,

    #[error("Upstream error: {0}")]
    Upstream(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details): (StatusCode, String, Option<Value>) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::UnknownType => (StatusCode::BAD_REQUEST, "Invalid type".to_string(), None),
            AppError::Configuration => {
                tracing::error!("generation request received but no API key is configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "API key not configured".to_string(),
                    None,
                )
            }
            AppError::Upstream(err) => {
                tracing::error!("upstream generation error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err.to_string(),
                    err.details(),
                )
            }
        };

        let body = match details {
            Some(details) => json!({ "error": message, "details": details }),
            None => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_maps_to_400_invalid_type() {
        let response = AppError::UnknownType.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn configuration_error_is_server_side() {
        let response = AppError::Configuration.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_error_is_server_side() {
        let response = AppError::Upstream(LlmError::EmptyContent).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
