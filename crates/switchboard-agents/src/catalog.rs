//! The fixed agent catalog.

use serde::{Deserialize, Serialize};

/// The closed set of agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Generalist,
    MathWhiz,
    WebResearcher,
}

/// Public description of an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDetail {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
}

impl AgentKind {
    /// Catalog order.
    pub const ALL: [AgentKind; 3] = [Self::Generalist, Self::MathWhiz, Self::WebResearcher];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Generalist => "Generalist",
            Self::MathWhiz => "MathWhiz",
            Self::WebResearcher => "WebResearcher",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Generalist => "A helpful general assistant for everyday questions.",
            Self::MathWhiz => "A specialist for solving mathematical problems.",
            Self::WebResearcher => "A specialist for finding information on the web.",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Generalist => "You are a helpful general assistant. Be friendly and concise.",
            Self::MathWhiz => {
                "You are a mathematical genius. You must use the calculator tool to solve problems."
            }
            Self::WebResearcher => {
                "You are a diligent web researcher. You must use the web_search tool to find information."
            }
        }
    }

    pub fn detail(&self) -> AgentDetail {
        AgentDetail {
            name: self.name().to_string(),
            description: self.description().to_string(),
            system_prompt: self.system_prompt().to_string(),
        }
    }
}

/// Immutable list of agent details built once at startup.
#[derive(Debug, Clone)]
pub struct AgentCatalog {
    agents: Vec<AgentDetail>,
}

impl AgentCatalog {
    pub fn new() -> Self {
        Self {
            agents: AgentKind::ALL.iter().map(AgentKind::detail).collect(),
        }
    }

    pub fn list(&self) -> &[AgentDetail] {
        &self.agents
    }

    pub fn get(&self, name: &str) -> Option<&AgentDetail> {
        self.agents.iter().find(|agent| agent.name == name)
    }
}

impl Default for AgentCatalog {
    fn default() -> Self {
        Self::new()
    }
}
