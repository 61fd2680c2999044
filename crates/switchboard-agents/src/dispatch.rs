//! Per-agent reply logic.
//!
//! Each agent turns a message into a reply and at most one tool call.
//! Nothing here fails: a message an agent cannot handle still gets a
//! reply explaining what it expected.

use std::sync::LazyLock;

use regex::Regex;

use crate::tools::{Operation, ToolInput, ToolRegistry};
use crate::{AgentKind, ToolCall};

static EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)\s*([+\-*/])\s*(\d+\.?\d*)").unwrap());

const MATH_GUIDANCE: &str =
    "I can help with math. Please provide a simple expression like '123 + 456'.";

/// What an agent produced for one message.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply {
    pub reply: String,
    pub tool_calls: Vec<ToolCall>,
}

impl AgentReply {
    fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            tool_calls: Vec::new(),
        }
    }

    fn with_tool(reply: String, call: ToolCall) -> Self {
        Self {
            reply,
            tool_calls: vec![call],
        }
    }
}

/// Find the first `<number> <op> <number>` in a message.
pub fn extract_expression(message: &str) -> Option<ToolInput> {
    let caps = EXPRESSION.captures(message)?;
    let a = caps[1].parse::<f64>().ok()?;
    let op = Operation::from_symbol(&caps[2])?;
    let b = caps[3].parse::<f64>().ok()?;
    Some(ToolInput::Calculator { a, b, op })
}

/// Runs the selected agent against a message.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    tools: ToolRegistry,
}

impl Dispatcher {
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub async fn run(&self, agent: AgentKind, message: &str) -> AgentReply {
        match agent {
            AgentKind::MathWhiz => self.math_whiz(message).await,
            AgentKind::WebResearcher => self.web_researcher(message).await,
            AgentKind::Generalist => self.generalist(message).await,
        }
    }

    async fn math_whiz(&self, message: &str) -> AgentReply {
        let Some(input) = extract_expression(message) else {
            return AgentReply::text(MATH_GUIDANCE);
        };
        let call = self.tools.invoke(input).await;
        let reply = format!("I've calculated that for you. {}", result_text(&call));
        AgentReply::with_tool(reply, call)
    }

    async fn web_researcher(&self, message: &str) -> AgentReply {
        let call = self
            .tools
            .invoke(ToolInput::WebSearch {
                query: message.to_string(),
            })
            .await;
        let reply = format!("Based on my web search: {}", result_text(&call));
        AgentReply::with_tool(reply, call)
    }

    async fn generalist(&self, message: &str) -> AgentReply {
        if !message.to_lowercase().contains("time") {
            return AgentReply::text(format!(
                "As the Generalist, I can tell you: '{message}' is an interesting topic!"
            ));
        }
        let call = self.tools.invoke(ToolInput::CurrentTime).await;
        let reply = format!("You asked about the time. {}", result_text(&call));
        AgentReply::with_tool(reply, call)
    }
}

fn result_text(call: &ToolCall) -> &str {
    call.result.as_deref().unwrap_or_default()
}
