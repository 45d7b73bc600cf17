//! Browser session extractor.
//!
//! Reads the signed session cookie. When it is absent or fails verification
//! a fresh session id is issued and the matching `Set-Cookie` header is
//! attached to the response via [`BrowserSession::attach`].

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use careerchat_infra::session::cookie::{find_cookie, set_cookie_header};
use careerchat_types::chat::SessionId;

use crate::http::error::AppError;
use crate::state::AppState;

/// The session id for the current browser.
#[derive(Debug)]
pub struct BrowserSession {
    pub id: SessionId,
    set_cookie: Option<String>,
}

impl BrowserSession {
    /// True when the request carried no valid session cookie.
    pub fn is_new(&self) -> bool {
        self.set_cookie.is_some()
    }

    /// Convert `response` and add `Set-Cookie` for a newly issued session.
    pub fn attach(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if let Some(cookie) = &self.set_cookie {
            match HeaderValue::from_str(cookie) {
                Ok(value) => {
                    response.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => debug!(error = %e, "Session cookie is not a valid header value"),
            }
        }
        response
    }
}

impl FromRequestParts<AppState> for BrowserSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_name = &state.config.session.cookie_name;

        let existing = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|header| header.to_str().ok())
            .find_map(|header| find_cookie(header, cookie_name))
            .and_then(|value| state.cookie_signer.verify(value));

        if let Some(id) = existing {
            return Ok(Self {
                id,
                set_cookie: None,
            });
        }

        let (id, value) = state
            .cookie_signer
            .issue()
            .map_err(|e| AppError::Internal(format!("failed to issue session: {e}")))?;
        debug!(session_id = %id, "Issued new browser session");

        Ok(Self {
            id,
            set_cookie: Some(set_cookie_header(cookie_name, &value)),
        })
    }
}
