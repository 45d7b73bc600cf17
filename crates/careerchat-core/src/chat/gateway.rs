//! ModelGateway trait definition.
//!
//! The port through which a chat turn reaches the external generative model.
//! Implementations live in careerchat-infra (e.g., `GeminiGateway`).

use careerchat_types::chat::ChatTurn;
use careerchat_types::error::GatewayError;

/// One request to the model: the conversation so far plus the new prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Model identifier (e.g., "gemini-1.5-pro").
    pub model: String,
    /// Full ordered history, already ending with the new user turn.
    pub history: Vec<ChatTurn>,
    /// The new user message.
    pub message: String,
}

/// Trait for generative model backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Failures of any
/// kind (auth, quota, network, malformed reply) come back as [`GatewayError`].
pub trait ModelGateway: Send + Sync {
    /// Short backend name used in logs (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send the request and return the model's reply text.
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl std::future::Future<Output = Result<String, GatewayError>> + Send;
}
