//! Chat session lifecycle for careerchat.
//!
//! - `ChatSession`: ordered, append-only conversation with record (de)serialization
//! - `SessionStore`: per-browser key/value persistence port
//! - `ModelGateway` / `BoxModelGateway`: generative model port and its boxed form
//! - `ChatService`: one chat turn from load to save

pub mod box_gateway;
pub mod gateway;
pub mod service;
pub mod session;
pub mod store;
