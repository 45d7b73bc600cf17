//! Infrastructure layer for careerchat.
//!
//! Contains implementations of the ports defined in `careerchat-core`:
//! the in-memory session store, the signed session cookie, the Gemini model
//! gateway, plus configuration loading and environment secrets.

pub mod config;
pub mod llm;
pub mod secret;
pub mod session;
