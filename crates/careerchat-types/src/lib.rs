//! Shared domain types for careerchat.
//!
//! Chat turns and their serialized session record, the fixed career report,
//! application configuration, and the error types shared across crates.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod report;
