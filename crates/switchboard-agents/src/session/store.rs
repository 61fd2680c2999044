//! Thread-safe session store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use switchboard_common::{ChatError, SessionId};
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};

use super::types::SessionEntry;
use crate::Message;

/// Idle time after which a session expires.
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(60 * 60);

/// Maps session ids to their history. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
    expiration: Duration,
}

impl SessionStore {
    pub fn new(expiration: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            expiration,
        }
    }

    /// Start an empty session. Returns its id and creation time.
    pub async fn create(&self) -> (SessionId, DateTime<Utc>) {
        let id = SessionId::new();
        let entry = SessionEntry::new();
        let created_at = entry.created_at;
        self.sessions.write().await.insert(id.clone(), entry);
        tracing::info!(session = %id, "New session created");
        (id, created_at)
    }

    /// Full history of a live session. Refreshes its last-access time.
    pub async fn get_history(&self, id: &SessionId) -> Result<Vec<Message>, ChatError> {
        self.access(id, |entry| entry.history.clone()).await
    }

    /// Validate a session and refresh its last-access time.
    pub async fn touch(&self, id: &SessionId) -> Result<(), ChatError> {
        self.access(id, |_| ()).await
    }

    /// Append one message. Callers validate the id first with
    /// [`get_history`](Self::get_history) or [`touch`](Self::touch).
    pub async fn append(&self, id: &SessionId, message: Message) -> Result<(), ChatError> {
        let mut map = self.sessions.write().await;
        let entry = map
            .get_mut(id)
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))?;
        entry.history.push(message);
        Ok(())
    }

    /// Append both halves of a chat turn under one lock, so turns from
    /// concurrent requests never interleave.
    pub async fn append_turn(
        &self,
        id: &SessionId,
        user: Message,
        assistant: Message,
    ) -> Result<(), ChatError> {
        let mut map = self.sessions.write().await;
        let entry = map
            .get_mut(id)
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))?;
        entry.history.extend([user, assistant]);
        Ok(())
    }

    /// Drop every session idle past the window. Returns how many were removed.
    pub async fn reap_expired(&self) -> usize {
        let mut map = self.sessions.write().await;
        let now = Instant::now();
        let before = map.len();
        map.retain(|id, entry| {
            let expired = entry.is_expired(now, self.expiration);
            if expired {
                tracing::info!(session = %id, "Reaping expired session");
            }
            !expired
        });
        before - map.len()
    }

    /// Number of stored sessions, expired-but-unvisited ones included.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn access<R>(
        &self,
        id: &SessionId,
        f: impl FnOnce(&mut SessionEntry) -> R,
    ) -> Result<R, ChatError> {
        let mut map = self.sessions.write().await;
        let now = Instant::now();

        let expired = match map.get(id) {
            None => return Err(ChatError::SessionNotFound(id.to_string())),
            Some(entry) => entry.is_expired(now, self.expiration),
        };
        if expired {
            map.remove(id);
            tracing::info!(session = %id, "Session expired");
            return Err(ChatError::SessionExpired(id.to_string()));
        }

        let entry = map
            .get_mut(id)
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))?;
        entry.last_accessed = now;
        Ok(f(entry))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_EXPIRATION)
    }
}
