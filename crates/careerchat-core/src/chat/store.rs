//! Session store trait.
//!
//! Per-browser-session key/value storage. Values are plain JSON so the
//! conversation logic never depends on how or where they are kept.
//! Implementations live in careerchat-infra.

use careerchat_types::chat::SessionId;
use careerchat_types::error::StoreError;

/// Trait for per-session key/value persistence.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait SessionStore: Send + Sync {
    /// Get a value by key. Returns None if the session or key does not exist.
    fn get(
        &self,
        session_id: &SessionId,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>, StoreError>> + Send;

    /// Set a value for a key (upsert). Last write wins.
    fn set(
        &self,
        session_id: &SessionId,
        key: &str,
        value: serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
