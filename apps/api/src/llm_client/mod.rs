/// LLM Client — the single point of entry for all generation-provider calls.
///
/// ARCHITECTURAL RULE: No other module may call the DeepSeek API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: deepseek-chat (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "deepseek-chat";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Displays the upstream message alone so it can be relayed to the client.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("No content generated")]
    EmptyContent,
}

impl LlmError {
    /// Structured detail object attached to the error response body.
    /// Never includes credentials or raw request payloads.
    pub fn details(&self) -> Option<Value> {
        match self {
            LlmError::Api { status, .. } => Some(json!({ "status": status })),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: ChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Extracts the generated text from the first choice, if present.
    fn text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// The single LLM client used by the generation endpoint.
/// Wraps the DeepSeek chat-completion API. One call per request: no retries,
/// no backoff, no timeout beyond the transport default.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEEPSEEK_API_URL.to_string())
    }

    /// Points the client at a different provider endpoint. Used by tests to
    /// stand in a mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Makes one chat-completion call and returns the generated text.
    ///
    /// A non-success status, a malformed body, or a success body with no
    /// extractable `choices[0].message.content` all fail — a response without
    /// text is never treated as an empty success.
    pub async fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!("calling {} (model: {MODEL})", self.base_url);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.trim())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the provider's own message when the body parses.
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("API request failed with status {status}"));
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response.text().ok_or(LlmError::EmptyContent)
    }
}
