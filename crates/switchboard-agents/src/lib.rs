//! Agent engine for Switchboard.
//!
//! Provides the canned chat agents and everything they need:
//! - Mock tools (calculator, web search, clock) with simulated latency
//! - A fixed agent catalog and keyword-based routing between agents
//! - Per-agent dispatch that turns a message into a reply plus tool calls
//! - An expiring in-memory session store
//! - `ChatService`, which ties the above into one request flow

pub mod catalog;
pub mod dispatch;
pub mod router;
pub mod service;
pub mod session;
pub mod tools;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use catalog::{AgentCatalog, AgentDetail, AgentKind};
pub use dispatch::{AgentReply, Dispatcher};
pub use router::AgentRouter;
pub use service::{ChatOutcome, ChatService, NewSession};
pub use session::SessionStore;
pub use tools::{Operation, ToolDetail, ToolInput, ToolKind, ToolLatency, ToolRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Record of one tool invocation attached to the reply that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub tool: String,
    pub args: serde_json::Map<String, serde_json::Value>,
    pub result: Option<String>,
}

/// One entry of a session's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Agent that produced an assistant message.
    pub agent_used: Option<String>,
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            agent_used: None,
            tool_calls: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>, agent: AgentKind, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            agent_used: Some(agent.name().to_string()),
            tool_calls,
            timestamp: Utc::now(),
        }
    }
}
