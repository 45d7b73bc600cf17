//! Environment variable secrets.
//!
//! - `GEMINI_API_KEY` (required): credential for the model gateway
//! - `CAREERCHAT_SECRET_KEY` (optional): session signing key; when unset a
//!   random 24-byte key is generated, so sessions do not survive a restart

use aes_gcm::aead::{rand_core::RngCore, OsRng};
use secrecy::{SecretSlice, SecretString};
use tracing::{info, warn};

/// Length of a generated session signing key.
const GENERATED_KEY_LEN: usize = 24;

/// Errors resolving process secrets.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("environment variable {0} is not set")]
    Missing(String),
}

/// Resolves secrets from named environment variables.
pub struct EnvSecrets {
    api_key_var: String,
    secret_key_var: String,
}

impl EnvSecrets {
    pub const API_KEY_VAR: &'static str = "GEMINI_API_KEY";
    pub const SECRET_KEY_VAR: &'static str = "CAREERCHAT_SECRET_KEY";

    /// Read from custom variable names.
    pub fn with_vars(api_key_var: impl Into<String>, secret_key_var: impl Into<String>) -> Self {
        Self {
            api_key_var: api_key_var.into(),
            secret_key_var: secret_key_var.into(),
        }
    }

    /// The model gateway API key. Empty values count as missing.
    pub fn api_key(&self) -> Result<SecretString, SecretError> {
        match read_var(&self.api_key_var) {
            Some(val) => Ok(SecretString::from(val)),
            None => Err(SecretError::Missing(self.api_key_var.clone())),
        }
    }

    /// The session signing key, generated when not configured.
    pub fn session_key(&self) -> SecretSlice<u8> {
        if let Some(val) = read_var(&self.secret_key_var) {
            info!(var = %self.secret_key_var, "Using configured session signing key");
            return SecretSlice::from(val.into_bytes());
        }

        warn!(
            var = %self.secret_key_var,
            "No session signing key configured; generated a random one (sessions reset on restart)"
        );
        let mut key = vec![0u8; GENERATED_KEY_LEN];
        OsRng.fill_bytes(&mut key);
        SecretSlice::from(key)
    }
}

impl Default for EnvSecrets {
    fn default() -> Self {
        Self::with_vars(Self::API_KEY_VAR, Self::SECRET_KEY_VAR)
    }
}

fn read_var(name: &str) -> Option<String> {
    // Non-Unicode values are treated as unset rather than an error.
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
