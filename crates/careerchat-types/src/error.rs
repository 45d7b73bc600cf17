use thiserror::Error;

/// Errors raised by the chat session manager.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("invalid role '{0}': allowed roles are 'user' and 'model'")]
    InvalidRole(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("malformed session record: {0}")]
    MalformedRecord(String),
}

/// Errors from the model gateway.
///
/// The `Display` output is what callers see in the `{ "error": ... }` body,
/// so variants carrying a provider message print it unadorned.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("{0}")]
    QuotaExceeded(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("{message}")]
    Provider { message: String },
}

/// Errors from session store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),

    #[error("session serialization error: {0}")]
    Serialization(String),
}
