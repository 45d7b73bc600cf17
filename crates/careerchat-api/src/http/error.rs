//! Application error type mapping to HTTP status codes and the `{error}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use careerchat_core::chat::service::ChatServiceError;
use careerchat_types::error::{ChatError, StoreError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The request is missing or has invalid input.
    Validation(String),
    /// The model gateway call failed.
    Gateway(String),
    /// Generic internal error.
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Gateway(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::Gateway(msg) | AppError::Internal(msg) => msg,
        }
    }
}

impl From<ChatServiceError> for AppError {
    fn from(e: ChatServiceError) -> Self {
        match e {
            ChatServiceError::Chat(e @ ChatError::MissingField(_)) => {
                AppError::Validation(e.to_string())
            }
            ChatServiceError::Chat(e) => AppError::Internal(e.to_string()),
            ChatServiceError::Gateway(e) => AppError::Gateway(e.to_string()),
            ChatServiceError::Store(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.message(), "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.message(), "Request rejected");
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
