//! Chat session lifetime settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session expiration and background sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Idle time after which a session is evicted on next access (valid range: 1-604800).
    pub expiration_secs: u64,
    /// Interval of the background sweep in seconds. 0 disables it.
    pub reap_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiration_secs: 3600,
            reap_interval_secs: 0,
        }
    }
}

impl SessionConfig {
    pub fn expiration(&self) -> Duration {
        Duration::from_secs(self.expiration_secs)
    }

    pub fn reap_interval(&self) -> Option<Duration> {
        (self.reap_interval_secs > 0).then(|| Duration::from_secs(self.reap_interval_secs))
    }
}
