//! Chat turn and session record types for careerchat.
//!
//! A conversation is an ordered list of [`ChatTurn`]s. Between requests it is
//! stored as a [`SessionRecord`], the plain `{ "history": [...] }` shape kept in
//! the session store under [`CHAT_SESSION_KEY`].

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::ChatError;

/// Session store slot holding the serialized conversation.
pub const CHAT_SESSION_KEY: &str = "chat";

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Model => write!(f, "model"),
        }
    }
}

impl FromStr for ChatRole {
    type Err = ChatError;

    /// Role names are matched exactly; `"User"` or `"assistant"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ChatRole::User),
            "model" => Ok(ChatRole::Model),
            other => Err(ChatError::InvalidRole(other.to_string())),
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, content)
    }
}

/// Plain serialized form of a conversation, as kept in the session store.
///
/// A record without a `history` key deserializes to an empty history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub history: Vec<TurnRecord>,
}

/// One serialized turn: `{ "role": "...", "parts": ["..."] }`.
///
/// The role stays a plain string here so that unknown values surface as
/// [`ChatError::InvalidRole`] when the record is turned back into turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub role: String,
    #[serde(default)]
    pub parts: Vec<String>,
}

impl From<&ChatTurn> for TurnRecord {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            role: turn.role.to_string(),
            parts: vec![turn.content.clone()],
        }
    }
}

impl TryFrom<TurnRecord> for ChatTurn {
    type Error = ChatError;

    fn try_from(record: TurnRecord) -> Result<Self, Self::Error> {
        let role = record.role.parse()?;
        Ok(ChatTurn {
            role,
            content: record.parts.concat(),
        })
    }
}

/// Opaque identifier of one browser session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
