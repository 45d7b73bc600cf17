//! In-memory session store implementation.
//!
//! Implements `SessionStore` from `careerchat-core` on a `DashMap` keyed by
//! session id. A session that has not been touched for `idle_ttl` is treated
//! as gone: reads drop it, writes start it over. Expired sessions are swept
//! whenever a new session is created, so no background task is needed.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use careerchat_core::chat::store::SessionStore;
use careerchat_types::chat::SessionId;
use careerchat_types::error::StoreError;
use dashmap::DashMap;
use tracing::debug;

struct SessionSlot {
    values: HashMap<String, serde_json::Value>,
    last_access: Instant,
}

impl SessionSlot {
    fn new() -> Self {
        Self {
            values: HashMap::new(),
            last_access: Instant::now(),
        }
    }

    fn is_expired(&self, idle_ttl: Duration) -> bool {
        self.last_access.elapsed() > idle_ttl
    }

    fn touch(&mut self) {
        self.last_access = Instant::now();
    }
}

/// Process-local implementation of `SessionStore`.
///
/// Contents are lost on restart, matching a browser-session lifetime.
pub struct InMemorySessionStore {
    slots: DashMap<String, SessionSlot>,
    idle_ttl: Duration,
}

impl InMemorySessionStore {
    /// Create a store that forgets sessions idle for longer than `idle_ttl`.
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            slots: DashMap::new(),
            idle_ttl,
        }
    }

    /// Number of sessions currently held (expired ones included until swept).
    pub fn session_count(&self) -> usize {
        self.slots.len()
    }

    /// Drop every expired session. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let before = self.slots.len();
        let ttl = self.idle_ttl;
        self.slots.retain(|_, slot| !slot.is_expired(ttl));
        let removed = before.saturating_sub(self.slots.len());
        if removed > 0 {
            debug!(removed, "Purged expired sessions");
        }
        removed
    }
}

impl SessionStore for InMemorySessionStore {
    async fn get(
        &self,
        session_id: &SessionId,
        key: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        let ttl = self.idle_ttl;
        if self
            .slots
            .remove_if(session_id.as_str(), |_, slot| slot.is_expired(ttl))
            .is_some()
        {
            debug!(session_id = %session_id, "Session expired");
            return Ok(None);
        }

        Ok(self.slots.get_mut(session_id.as_str()).and_then(|mut slot| {
            slot.touch();
            slot.values.get(key).cloned()
        }))
    }

    async fn set(
        &self,
        session_id: &SessionId,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), StoreError> {
        let mut created = false;
        {
            let mut slot = self
                .slots
                .entry(session_id.as_str().to_string())
                .or_insert_with(|| {
                    created = true;
                    SessionSlot::new()
                });
            if slot.is_expired(self.idle_ttl) {
                slot.values.clear();
            }
            slot.values.insert(key.to_string(), value);
            slot.touch();
        }

        if created {
            self.purge_expired();
        }
        Ok(())
    }
}
