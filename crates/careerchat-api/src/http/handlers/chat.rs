//! Chat handlers.
//!
//! GET  / - Chat page (ensures the browser has a session)
//! POST / - One chat turn: form field `message` -> `{response}` or `{error}`

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::http::pages::CHAT_PAGE;
use crate::http::session::BrowserSession;
use crate::state::AppState;

/// Form body for `POST /`.
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    pub message: Option<String>,
}

/// Successful chat-turn body.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// GET / - Serve the chat page, creating an empty conversation if needed.
pub async fn chat_page(
    State(state): State<AppState>,
    session: BrowserSession,
) -> Result<Response, AppError> {
    state.chat_service.ensure_session(&session.id).await?;
    Ok(session.attach(Html(CHAT_PAGE)))
}

/// POST / - Send the user's message to the model and return its reply.
///
/// Failures come back as `{error}` with the gateway's message; the stored
/// conversation is only updated on success. A body that is not a form
/// (wrong or missing content type) is a 400 like a missing field.
pub async fn send_message(
    State(state): State<AppState>,
    session: BrowserSession,
    form: Result<Form<ChatForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            return session.attach(AppError::Validation(rejection.body_text()));
        }
    };

    match state
        .chat_service
        .send_message(&session.id, form.message.as_deref())
        .await
    {
        Ok(response) => session.attach(Json(ChatReply { response })),
        Err(e) => session.attach(AppError::from(e)),
    }
}
