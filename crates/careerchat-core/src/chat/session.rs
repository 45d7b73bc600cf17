//! In-memory chat session.
//!
//! A `ChatSession` is rebuilt from the session store at the start of each
//! request, appended to, and written back. Turns are never edited or removed.

use careerchat_types::chat::{ChatRole, ChatTurn, SessionRecord, TurnRecord};
use careerchat_types::error::ChatError;

/// Ordered conversation between the user and the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    /// Create an empty session (a new conversation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from an existing ordered list of turns.
    pub fn from_turns(turns: Vec<ChatTurn>) -> Self {
        Self { turns }
    }

    /// All turns in conversation order.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Append a turn, validating the role name first.
    ///
    /// On `InvalidRole` the session is left untouched.
    pub fn append_message(
        &mut self,
        role: &str,
        content: impl Into<String>,
    ) -> Result<(), ChatError> {
        let role: ChatRole = role.parse()?;
        self.push(role, content);
        Ok(())
    }

    /// Append a turn with an already-typed role.
    pub fn push(&mut self, role: ChatRole, content: impl Into<String>) {
        self.turns.push(ChatTurn::new(role, content));
    }

    /// Plain record form for the session store.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            history: self.turns.iter().map(TurnRecord::from).collect(),
        }
    }

    /// Rebuild a session from its record form, validating every role.
    pub fn from_record(record: SessionRecord) -> Result<Self, ChatError> {
        let turns = record
            .history
            .into_iter()
            .map(ChatTurn::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { turns })
    }

    /// JSON value of [`Self::to_record`], as stored under the `"chat"` slot.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({ "history": self.to_record().history })
    }

    /// Rebuild a session from a stored JSON value.
    ///
    /// An object without a `history` key yields an empty session.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ChatError> {
        let record: SessionRecord = serde_json::from_value(value)
            .map_err(|e| ChatError::MalformedRecord(e.to_string()))?;
        Self::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> ChatSession {
        let mut session = ChatSession::new();
        session.append_message("user", "Hello").unwrap();
        session.append_message("model", "Hi there!").unwrap();
        session.append_message("user", "Tell me more").unwrap();
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = ChatSession::new();
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
    }

    #[test]
    fn test_append_preserves_order() {
        let session = sample_session();
        let contents: Vec<&str> = session.turns().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["Hello", "Hi there!", "Tell me more"]);
        assert_eq!(session.turns()[1].role, ChatRole::Model);
    }

    #[test]
    fn test_invalid_role_leaves_session_unchanged() {
        let mut session = sample_session();
        let before = session.clone();

        for role in ["assistant", "system", "", "USER", "model "] {
            let err = session.append_message(role, "ignored").unwrap_err();
            assert_eq!(err, ChatError::InvalidRole(role.to_string()));
        }

        assert_eq!(session, before);
    }

    #[test]
    fn test_record_roundtrip() {
        let session = sample_session();
        let restored = ChatSession::from_record(session.to_record()).unwrap();
        assert_eq!(restored, session);

        let restored = ChatSession::from_value(session.to_value()).unwrap();
        assert_eq!(restored.turns(), session.turns());
    }

    #[test]
    fn test_roundtrip_empty_and_unusual_content() {
        let mut session = ChatSession::new();
        assert_eq!(ChatSession::from_value(session.to_value()).unwrap(), session);

        session.push(ChatRole::User, "");
        session.push(ChatRole::Model, "line one\nline \"two\" <b>ünïcode</b>");
        assert_eq!(ChatSession::from_value(session.to_value()).unwrap(), session);
    }

    #[test]
    fn test_to_value_shape() {
        let mut session = ChatSession::new();
        session.push(ChatRole::User, "Hello");
        assert_eq!(
            session.to_value(),
            serde_json::json!({ "history": [{ "role": "user", "parts": ["Hello"] }] })
        );
    }

    #[test]
    fn test_from_value_missing_history_is_empty() {
        let session = ChatSession::from_value(serde_json::json!({})).unwrap();
        assert!(session.is_empty());
    }

    #[test]
    fn test_from_value_rejects_unknown_role() {
        let value = serde_json::json!({
            "history": [
                { "role": "user", "parts": ["Hello"] },
                { "role": "assistant", "parts": ["Hi"] }
            ]
        });
        let err = ChatSession::from_value(value).unwrap_err();
        assert_eq!(err, ChatError::InvalidRole("assistant".to_string()));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = ChatSession::from_value(serde_json::json!("nope")).unwrap_err();
        assert!(matches!(err, ChatError::MalformedRecord(_)));
    }
}
