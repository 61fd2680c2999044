//! Per-session state held by the store.

use chrono::{DateTime, Utc};
use tokio::time::{Duration, Instant};

use crate::Message;

pub(crate) struct SessionEntry {
    pub(super) history: Vec<Message>,
    pub(super) created_at: DateTime<Utc>,
    /// Monotonic; drives expiry.
    pub(super) last_accessed: Instant,
}

impl SessionEntry {
    pub(super) fn new() -> Self {
        Self {
            history: Vec::new(),
            created_at: Utc::now(),
            last_accessed: Instant::now(),
        }
    }

    pub(super) fn is_expired(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.last_accessed) > window
    }
}
