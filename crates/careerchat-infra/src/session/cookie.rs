//! Signed session cookies.
//!
//! The browser holds `<session id>.<hex HMAC-SHA256(key, session id)>`.
//! Verification is constant-time (via the hmac crate's `verify_slice`);
//! anything malformed or tampered with is treated as "no session".

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretSlice};
use sha2::Sha256;
use uuid::Uuid;

use careerchat_types::chat::SessionId;

type HmacSha256 = Hmac<Sha256>;

/// Errors from session cookie signing.
#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    #[error("session signing key must not be empty")]
    EmptyKey,

    #[error("invalid session signing key: {0}")]
    InvalidKey(String),
}

/// Issues and verifies signed session ids.
///
/// Does not derive Debug so the signing key can't end up in logs.
pub struct SessionCookieSigner {
    key: SecretSlice<u8>,
}

impl SessionCookieSigner {
    pub fn new(key: SecretSlice<u8>) -> Result<Self, CookieError> {
        if key.expose_secret().is_empty() {
            return Err(CookieError::EmptyKey);
        }
        Ok(Self { key })
    }

    /// Create a fresh session id and its signed cookie value.
    pub fn issue(&self) -> Result<(SessionId, String), CookieError> {
        let id = SessionId(Uuid::new_v4().to_string());
        let value = self.sign(&id)?;
        Ok((id, value))
    }

    /// Signed cookie value for an existing session id.
    pub fn sign(&self, session_id: &SessionId) -> Result<String, CookieError> {
        let mut mac = self.mac()?;
        mac.update(session_id.as_str().as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());
        Ok(format!("{}.{}", session_id.as_str(), signature))
    }

    /// Return the session id if the cookie value carries a valid signature.
    pub fn verify(&self, cookie_value: &str) -> Option<SessionId> {
        let (id, signature_hex) = cookie_value.rsplit_once('.')?;
        if id.is_empty() {
            return None;
        }
        let signature = hex::decode(signature_hex).ok()?;

        let mut mac = self.mac().ok()?;
        mac.update(id.as_bytes());
        mac.verify_slice(&signature).ok()?;

        Some(SessionId(id.to_string()))
    }

    fn mac(&self) -> Result<HmacSha256, CookieError> {
        HmacSha256::new_from_slice(self.key.expose_secret())
            .map_err(|e| CookieError::InvalidKey(e.to_string()))
    }
}

/// `Set-Cookie` header value for a browser-session cookie.
pub fn set_cookie_header(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax")
}

/// Find a cookie by name in a `Cookie` request header value.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}
