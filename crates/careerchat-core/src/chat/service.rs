//! Chat service running one chat turn end to end.
//!
//! ChatService coordinates the SessionStore and ModelGateway: load the
//! stored conversation, append the user's message, ask the model, append its
//! reply and save. Nothing is written back unless the model call succeeds.

use careerchat_types::chat::{ChatRole, SessionId, CHAT_SESSION_KEY};
use careerchat_types::error::{ChatError, GatewayError, StoreError};
use tracing::{debug, info, warn};

use crate::chat::gateway::{GenerateRequest, ModelGateway};
use crate::chat::session::ChatSession;
use crate::chat::store::SessionStore;

/// Errors from a chat turn.
///
/// `Display` is transparent so the inner message reaches the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates the chat-turn lifecycle.
///
/// Generic over `SessionStore` and `ModelGateway` to maintain clean
/// architecture (careerchat-core never depends on careerchat-infra).
pub struct ChatService<S: SessionStore, G: ModelGateway> {
    store: S,
    gateway: G,
    model: String,
}

impl<S: SessionStore, G: ModelGateway> ChatService<S, G> {
    /// Create a chat service sending every request to `model`.
    pub fn new(store: S, gateway: G, model: impl Into<String>) -> Self {
        Self {
            store,
            gateway,
            model: model.into(),
        }
    }

    /// Access the session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Model identifier used for gateway requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Load the conversation for a browser session.
    ///
    /// A missing slot yields an empty session. A stored record that fails
    /// validation is logged and replaced by an empty session, so a corrupt
    /// entry cannot wedge the browser session; it is overwritten on the next
    /// successful turn.
    pub async fn load_session(&self, session_id: &SessionId) -> Result<ChatSession, StoreError> {
        let Some(value) = self.store.get(session_id, CHAT_SESSION_KEY).await? else {
            return Ok(ChatSession::new());
        };

        match ChatSession::from_value(value) {
            Ok(session) => Ok(session),
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "Discarding invalid stored chat session");
                Ok(ChatSession::new())
            }
        }
    }

    /// Persist the conversation for a browser session.
    pub async fn save_session(
        &self,
        session_id: &SessionId,
        session: &ChatSession,
    ) -> Result<(), StoreError> {
        self.store
            .set(session_id, CHAT_SESSION_KEY, session.to_value())
            .await
    }

    /// Make sure a chat slot exists for this browser session.
    ///
    /// Stores an empty conversation when none is present; existing history is
    /// left alone.
    pub async fn ensure_session(&self, session_id: &SessionId) -> Result<(), StoreError> {
        if self.store.get(session_id, CHAT_SESSION_KEY).await?.is_none() {
            self.save_session(session_id, &ChatSession::new()).await?;
            debug!(session_id = %session_id, "Initialized empty chat session");
        }
        Ok(())
    }

    /// Run one chat turn and return the model's reply.
    ///
    /// `message` is the raw form field; `None` means the field was absent.
    pub async fn send_message(
        &self,
        session_id: &SessionId,
        message: Option<&str>,
    ) -> Result<String, ChatServiceError> {
        let mut session = self.load_session(session_id).await?;
        let message = message.ok_or(ChatError::MissingField("message"))?;

        session.append_message(&ChatRole::User.to_string(), message)?;

        let request = GenerateRequest {
            model: self.model.clone(),
            history: session.turns().to_vec(),
            message: message.to_string(),
        };

        let reply = match self.gateway.generate(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(
                    session_id = %session_id,
                    gateway = self.gateway.name(),
                    error = %e,
                    "Model gateway call failed; session not updated"
                );
                return Err(e.into());
            }
        };

        session.push(ChatRole::Model, reply.clone());
        self.save_session(session_id, &session).await?;

        info!(
            session_id = %session_id,
            gateway = self.gateway.name(),
            turns = session.len(),
            "Chat turn completed"
        );

        Ok(reply)
    }
}
