//! Application state wiring the services together.
//!
//! ChatService is generic over the store and gateway traits; AppState pins it
//! to the in-memory store and a boxed gateway (Gemini in production, a
//! scripted gateway in tests).

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretSlice;

use careerchat_core::chat::box_gateway::BoxModelGateway;
use careerchat_core::chat::service::ChatService;
use careerchat_infra::llm::gemini::GeminiGateway;
use careerchat_infra::secret::EnvSecrets;
use careerchat_infra::session::{InMemorySessionStore, SessionCookieSigner};
use careerchat_types::config::AppConfig;

pub type ConcreteChatService = ChatService<InMemorySessionStore, BoxModelGateway>;

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub cookie_signer: Arc<SessionCookieSigner>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire services from config plus the `GEMINI_API_KEY` and
    /// `CAREERCHAT_SECRET_KEY` environment variables.
    pub fn init(config: AppConfig) -> anyhow::Result<Self> {
        let secrets = EnvSecrets::default();
        let api_key = secrets.api_key()?;
        let gateway = GeminiGateway::from_config(api_key, &config.gateway)?;

        Self::new(config, BoxModelGateway::new(gateway), secrets.session_key())
    }

    /// Wire services around an already-built gateway and signing key.
    pub fn new(
        config: AppConfig,
        gateway: BoxModelGateway,
        session_key: SecretSlice<u8>,
    ) -> anyhow::Result<Self> {
        let store = InMemorySessionStore::new(Duration::from_secs(config.session.idle_ttl_secs));
        let chat_service = ChatService::new(store, gateway, config.gateway.model.clone());
        let cookie_signer = SessionCookieSigner::new(session_key)?;

        Ok(Self {
            chat_service: Arc::new(chat_service),
            cookie_signer: Arc::new(cookie_signer),
            config: Arc::new(config),
        })
    }
}
