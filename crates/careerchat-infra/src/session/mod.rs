//! Browser session plumbing.
//!
//! - `InMemorySessionStore`: DashMap-backed `SessionStore` with lazy idle expiry
//! - `SessionCookieSigner`: HMAC-SHA256 signed session id cookies

pub mod cookie;
pub mod memory;

pub use cookie::SessionCookieSigner;
pub use memory::InMemorySessionStore;
