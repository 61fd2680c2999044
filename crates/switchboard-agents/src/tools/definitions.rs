//! Tool names, descriptions and parameter schemas.

use serde::{Deserialize, Serialize};

/// The closed set of tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Calculator,
    WebSearch,
    CurrentTime,
}

/// Discovery entry for one tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDetail {
    pub tool_name: String,
    pub description: String,
    pub schema: serde_json::Value,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [Self::Calculator, Self::WebSearch, Self::CurrentTime];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::WebSearch => "web_search",
            Self::CurrentTime => "current_time",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Calculator => "Performs a basic arithmetic calculation.",
            Self::WebSearch => "Performs a mock web search and returns a summary.",
            Self::CurrentTime => "Returns the current date and time as a formatted string.",
        }
    }

    /// JSON Schema for the tool's arguments.
    pub fn parameters(&self) -> serde_json::Value {
        match self {
            Self::Calculator => serde_json::json!({
                "type": "object",
                "properties": {
                    "a": {
                        "type": "number",
                        "description": "The first number."
                    },
                    "b": {
                        "type": "number",
                        "description": "The second number."
                    },
                    "op": {
                        "type": "string",
                        "description": "The operation to perform.",
                        "enum": ["add", "subtract", "multiply", "divide"]
                    }
                },
                "required": ["a", "b", "op"]
            }),
            Self::WebSearch => serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query."
                    }
                },
                "required": ["query"]
            }),
            Self::CurrentTime => serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    pub fn detail(&self) -> ToolDetail {
        ToolDetail {
            tool_name: self.name().to_string(),
            description: self.description().to_string(),
            schema: self.parameters(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ToolKind::from_name("teleport"), None);
        assert_eq!(ToolKind::from_name("Calculator"), None);
    }

    #[test]
    fn calculator_schema_requires_all_operands() {
        let schema = ToolKind::Calculator.parameters();
        assert_eq!(schema["required"], serde_json::json!(["a", "b", "op"]));
        assert_eq!(schema["properties"]["op"]["enum"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn current_time_takes_no_arguments() {
        let schema = ToolKind::CurrentTime.parameters();
        assert!(schema["properties"].as_object().unwrap().is_empty());
    }

    #[test]
    fn detail_serializes_with_schema_key() {
        let json = serde_json::to_value(ToolKind::WebSearch.detail()).unwrap();
        assert_eq!(json["tool_name"], "web_search");
        assert_eq!(json["schema"]["required"], serde_json::json!(["query"]));
    }
}
