//! Simulated tool latency.

use serde::{Deserialize, Serialize};

/// Artificial delay applied to each mock tool, in milliseconds (valid range: 0-60000).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub calculator_latency_ms: u64,
    pub web_search_latency_ms: u64,
    pub current_time_latency_ms: u64,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            calculator_latency_ms: 500,
            web_search_latency_ms: 1000,
            current_time_latency_ms: 200,
        }
    }
}
