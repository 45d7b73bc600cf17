//! HTTP layer for careerchat.
//!
//! Axum routes for the chat page, the chat-turn endpoint and the report page,
//! with the browser session carried in a signed cookie.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod session;
