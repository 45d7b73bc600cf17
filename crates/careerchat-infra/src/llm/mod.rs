//! Model gateway implementations.

pub mod gemini;
