//! Tool registry: latency simulation and invocation by name.

use std::time::Duration;

use switchboard_common::ChatError;
use tracing::debug;

use super::{mock, ToolDetail, ToolInput, ToolKind};
use crate::ToolCall;

/// Simulated backend delay per tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolLatency {
    pub calculator: Duration,
    pub web_search: Duration,
    pub current_time: Duration,
}

impl ToolLatency {
    /// No delay at all, for tests.
    pub fn none() -> Self {
        Self {
            calculator: Duration::ZERO,
            web_search: Duration::ZERO,
            current_time: Duration::ZERO,
        }
    }

    pub fn from_millis(calculator: u64, web_search: u64, current_time: u64) -> Self {
        Self {
            calculator: Duration::from_millis(calculator),
            web_search: Duration::from_millis(web_search),
            current_time: Duration::from_millis(current_time),
        }
    }

    pub fn for_tool(&self, kind: ToolKind) -> Duration {
        match kind {
            ToolKind::Calculator => self.calculator,
            ToolKind::WebSearch => self.web_search,
            ToolKind::CurrentTime => self.current_time,
        }
    }
}

impl Default for ToolLatency {
    fn default() -> Self {
        Self::from_millis(500, 1000, 200)
    }
}

/// Runs tools and records each run as a `ToolCall`.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    latency: ToolLatency,
}

impl ToolRegistry {
    pub fn new(latency: ToolLatency) -> Self {
        Self { latency }
    }

    pub fn without_latency() -> Self {
        Self::new(ToolLatency::none())
    }

    /// Discovery listing, in registration order.
    pub fn tools(&self) -> Vec<ToolDetail> {
        ToolKind::ALL.iter().map(ToolKind::detail).collect()
    }

    /// Run a tool. Never fails: the calculator reports division by zero in
    /// its result string.
    pub async fn invoke(&self, input: ToolInput) -> ToolCall {
        let kind = input.kind();
        let delay = self.latency.for_tool(kind);
        debug!(tool = %kind.name(), delay_ms = delay.as_millis() as u64, "Executing tool");

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let result = match &input {
            ToolInput::Calculator { a, b, op } => mock::calculate(*a, *b, *op),
            ToolInput::WebSearch { query } => mock::web_search(query),
            ToolInput::CurrentTime => mock::current_time(),
        };

        ToolCall {
            tool: kind.name().to_string(),
            args: input.args(),
            result: Some(result),
        }
    }

    /// Look a tool up by name, parse its JSON arguments and run it.
    pub async fn call(&self, name: &str, args: &serde_json::Value) -> Result<ToolCall, ChatError> {
        let kind = ToolKind::from_name(name).ok_or_else(|| ChatError::UnknownTool(name.to_string()))?;
        let input = ToolInput::from_json(kind, args)?;
        Ok(self.invoke(input).await)
    }
}
