//! Process secrets: the model API key and the session signing key.

pub mod env;

pub use env::{EnvSecrets, SecretError};
