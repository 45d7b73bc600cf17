//! Business logic and port trait definitions for careerchat.
//!
//! This crate defines the "ports" (`SessionStore`, `ModelGateway`) that the
//! infrastructure layer implements. It depends only on `careerchat-types` --
//! never on `careerchat-infra` or any HTTP/storage crate.

pub mod chat;
pub mod report;
