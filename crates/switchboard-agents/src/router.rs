//! Agent router: picks the agent that answers a message.
//!
//! Routing is an ordered list of keyword rules. The first rule whose
//! predicate matches wins, so rule order is the tie-break: a message that
//! looks like both math and research goes to `MathWhiz`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::AgentKind;

static MATH_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:calculate|plus|minus|times|divided by)\b").unwrap()
});

// An operator glued to word characters ("2+2", "x*y"), or spaced only
// between digits ("2 + 2").
static MATH_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[+\-*/]\w|\d\s*[+\-*/]\s*\d").unwrap());

static RESEARCH_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:search|find|what is|who is|tell me about)\b").unwrap()
});

/// Does the message ask for arithmetic?
pub fn is_math_request(message: &str) -> bool {
    MATH_KEYWORDS.is_match(message) || MATH_SYMBOL.is_match(message)
}

/// Does the message ask to look something up?
pub fn is_research_request(message: &str) -> bool {
    RESEARCH_KEYWORDS.is_match(message)
}

/// One routing rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub target: AgentKind,
    matches: fn(&str) -> bool,
}

impl Rule {
    pub fn new(target: AgentKind, matches: fn(&str) -> bool) -> Self {
        Self { target, matches }
    }

    pub fn matches(&self, message: &str) -> bool {
        (self.matches)(message)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("target", &self.target).finish()
    }
}

/// Selects an agent for each incoming message.
#[derive(Debug, Clone)]
pub struct AgentRouter {
    rules: Vec<Rule>,
    fallback: AgentKind,
}

impl AgentRouter {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Rule::new(AgentKind::MathWhiz, is_math_request),
                Rule::new(AgentKind::WebResearcher, is_research_request),
            ],
            fallback: AgentKind::Generalist,
        }
    }

    /// Pick an agent. An explicit, known `requested` name always wins;
    /// unknown names are ignored.
    pub fn select(&self, message: &str, requested: Option<&str>) -> AgentKind {
        if let Some(name) = requested.filter(|name| !name.is_empty()) {
            match AgentKind::from_name(name) {
                Some(kind) => return kind,
                None => debug!(requested = %name, "Unknown agent override, routing by keywords"),
            }
        }

        self.rules
            .iter()
            .find(|rule| rule.matches(message))
            .map(|rule| rule.target)
            .unwrap_or(self.fallback)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for AgentRouter {
    fn default() -> Self {
        Self::new()
    }
}
