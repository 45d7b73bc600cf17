//! Google Gemini model gateway.
//!
//! Talks to the native `generateContent` REST endpoint rather than the
//! OpenAI-compatible surface, so `user`/`model` roles map one to one.

pub mod client;
pub mod types;

pub use client::GeminiGateway;
