//! GeminiGateway -- concrete [`ModelGateway`] implementation for Google Gemini.
//!
//! Sends the whole conversation to
//! `POST {base_url}/v1beta/models/{model}:generateContent` and returns the
//! text of the first candidate. No retries; every failure is mapped onto a
//! [`GatewayError`] and handed back to the caller.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building the request header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use careerchat_core::chat::gateway::{GenerateRequest, ModelGateway};
use careerchat_types::chat::ChatRole;
use careerchat_types::config::GatewayConfig;
use careerchat_types::error::GatewayError;

use super::types::{ApiErrorBody, Content, GenerateContentRequest, GenerateContentResponse};

/// Google Gemini model gateway.
///
/// Does not derive Debug so the API key can never be printed.
pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiGateway {
    /// Default API host.
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    /// Create a gateway with the given whole-request timeout.
    pub fn new(api_key: SecretString, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a gateway from the `[gateway]` config section.
    pub fn from_config(api_key: SecretString, config: &GatewayConfig) -> Result<Self, GatewayError> {
        Ok(Self::new(api_key, Duration::from_secs(config.timeout_secs))?
            .with_base_url(config.base_url.clone()))
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    /// Convert a [`GenerateRequest`] into the Gemini request body.
    ///
    /// The history normally already ends with the new user turn; the prompt
    /// is only appended when it does not, so it is sent exactly once.
    fn to_gemini_request(request: &GenerateRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = request
            .history
            .iter()
            .map(|turn| Content::text(&turn.role.to_string(), &turn.content))
            .collect();

        let ends_with_prompt = request
            .history
            .last()
            .is_some_and(|t| t.role == ChatRole::User && t.content == request.message);
        if !ends_with_prompt {
            contents.push(Content::text(&ChatRole::User.to_string(), &request.message));
        }

        GenerateContentRequest { contents }
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, GatewayError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!("prompt blocked ({r})"))
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(GatewayError::MalformedResponse(reason));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(GatewayError::MalformedResponse(format!(
            "candidate has no text (finish reason: {reason})"
        )));
    }

    Ok(text)
}

/// Map a non-success HTTP status and body to a [`GatewayError`].
fn map_status_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| format!("HTTP {status}: {body}"));

    match status {
        401 | 403 => GatewayError::Authentication(message),
        429 => GatewayError::QuotaExceeded(message),
        _ => GatewayError::Api { status, message },
    }
}

impl ModelGateway for GeminiGateway {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        let body = Self::to_gemini_request(request);
        let url = self.url(&request.model);

        tracing::debug!(
            model = %request.model,
            turns = body.contents.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status.as_u16(), &error_body));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            GatewayError::MalformedResponse(format!("failed to parse response: {e}"))
        })?;

        extract_text(parsed)
    }
}
