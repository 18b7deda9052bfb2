//! HTTP client for an OpenAI-compatible chat-completions endpoint (Groq by
//! default).
//!
//! Sends one system instruction plus the user prompt with fixed sampling
//! parameters and returns the first choice's text verbatim. Every failure
//! (transport, non-2xx status, undecodable body, empty reply) surfaces as
//! [`LlmError::Upstream`].

use std::time::Duration;

use bizfinder_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::LlmError;
use crate::prompt::SYSTEM_PROMPT;
use crate::types::{ApiErrorEnvelope, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const COMPLETIONS_PATH: &str = "chat/completions";

pub const TEMPERATURE: f32 = 0.5;
pub const MAX_TOKENS: u32 = 1024;

/// Longest slice of a non-JSON error body carried into an error message.
const ERROR_BODY_PREVIEW: usize = 200;

/// Endpoint, model, and timeout for a [`CompletionClient`].
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl CompletionSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.llm_base_url.clone(),
            model: config.llm_model.clone(),
            timeout_secs: config.llm_timeout_secs,
        }
    }
}

/// Client for the chat-completions endpoint.
///
/// Construct it once at startup and share it; it holds a pooled
/// `reqwest::Client`.
pub struct CompletionClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: Url,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl CompletionClient {
    /// Builds the client from application configuration.
    ///
    /// # Errors
    ///
    /// - [`LlmError::ClientUnconfigured`] when no API key is configured.
    /// - [`LlmError::Upstream`] if the HTTP client cannot be built or the
    ///   configured base URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, LlmError> {
        let api_key = config
            .groq_api_key
            .as_deref()
            .ok_or(LlmError::ClientUnconfigured)?;
        Self::new(api_key, &CompletionSettings::from_config(config))
    }

    /// Builds a client with an explicit key and settings.
    ///
    /// # Errors
    ///
    /// - [`LlmError::ClientUnconfigured`] when `api_key` is blank.
    /// - [`LlmError::Upstream`] if the HTTP client cannot be built or
    ///   `settings.base_url` is not a valid URL.
    pub fn new(api_key: &str, settings: &CompletionSettings) -> Result<Self, LlmError> {
        if api_key.trim().is_empty() {
            return Err(LlmError::ClientUnconfigured);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("bizfinder/0.1 (local-business-finder)")
            .build()
            .map_err(|e| LlmError::upstream(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: settings.model.clone(),
            endpoint: completions_url(&settings.base_url)?,
        })
    }

    /// Shortcut for tests: default settings pointed at `base_url`.
    ///
    /// # Errors
    ///
    /// Same as [`CompletionClient::new`].
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, LlmError> {
        Self::new(
            api_key,
            &CompletionSettings {
                base_url: base_url.to_owned(),
                ..CompletionSettings::default()
            },
        )
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` and returns the first choice's message text verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Upstream`] when the request fails, the endpoint
    /// answers with a non-2xx status, the body does not decode, or the reply
    /// has no choices or no content.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        tracing::info!(model = %self.model, "sending completion request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::upstream(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::upstream(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            let detail = api_error_detail(&body);
            tracing::warn!(%status, detail, "completion endpoint returned an error");
            return Err(LlmError::upstream(format!("API returned {status}: {detail}")));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::upstream(format!("failed to parse response: {e}")))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::upstream("response contained no completion text"))?;

        tracing::debug!(chars = text.len(), "received completion reply");
        Ok(text)
    }
}

/// Joins the chat-completions path onto `base_url`, tolerating a trailing
/// slash.
fn completions_url(base_url: &str) -> Result<Url, LlmError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised)
        .and_then(|base| base.join(COMPLETIONS_PATH))
        .map_err(|e| LlmError::upstream(format!("invalid base URL '{base_url}': {e}")))
}

/// Pulls `error.message` out of an error body, or a short preview of the raw
/// body when it is not the expected JSON.
fn api_error_detail(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(ERROR_BODY_PREVIEW).collect()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
