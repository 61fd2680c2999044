//! Typed tool arguments.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use switchboard_common::ChatError;

use super::ToolKind;

/// Arithmetic operation understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

/// A fully parsed tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInput {
    Calculator { a: f64, b: f64, op: Operation },
    WebSearch { query: String },
    CurrentTime,
}

#[derive(Deserialize)]
struct CalculatorArgs {
    a: f64,
    b: f64,
    op: Operation,
}

#[derive(Deserialize)]
struct WebSearchArgs {
    query: String,
}

impl ToolInput {
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Calculator { .. } => ToolKind::Calculator,
            Self::WebSearch { .. } => ToolKind::WebSearch,
            Self::CurrentTime => ToolKind::CurrentTime,
        }
    }

    /// Arguments as recorded on a `ToolCall`.
    pub fn args(&self) -> Map<String, Value> {
        let mut args = Map::new();
        match self {
            Self::Calculator { a, b, op } => {
                args.insert("a".into(), Value::from(*a));
                args.insert("b".into(), Value::from(*b));
                args.insert("op".into(), Value::from(op.as_str()));
            }
            Self::WebSearch { query } => {
                args.insert("query".into(), Value::from(query.as_str()));
            }
            Self::CurrentTime => {}
        }
        args
    }

    /// Parse untyped JSON arguments for `kind`. `null` counts as `{}`.
    pub fn from_json(kind: ToolKind, args: &Value) -> Result<Self, ChatError> {
        let args = match args {
            Value::Null => Value::Object(Map::new()),
            Value::Object(_) => args.clone(),
            other => {
                return Err(ChatError::InvalidArguments(format!(
                    "expected a JSON object, got {other}"
                )))
            }
        };
        let invalid = |e: serde_json::Error| ChatError::InvalidArguments(e.to_string());

        match kind {
            ToolKind::Calculator => {
                let CalculatorArgs { a, b, op } = serde_json::from_value(args).map_err(invalid)?;
                Ok(Self::Calculator { a, b, op })
            }
            ToolKind::WebSearch => {
                let WebSearchArgs { query } = serde_json::from_value(args).map_err(invalid)?;
                Ok(Self::WebSearch { query })
            }
            ToolKind::CurrentTime => Ok(Self::CurrentTime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn symbols_map_to_operations() {
        assert_eq!(Operation::from_symbol("+"), Some(Operation::Add));
        assert_eq!(Operation::from_symbol("-"), Some(Operation::Subtract));
        assert_eq!(Operation::from_symbol("*"), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol("/"), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol("%"), None);
    }

    #[test]
    fn calculator_args_are_recorded_as_floats() {
        let input = ToolInput::Calculator {
            a: 4.0,
            b: 5.0,
            op: Operation::Add,
        };
        assert_eq!(
            Value::Object(input.args()),
            json!({"a": 4.0, "b": 5.0, "op": "add"})
        );
    }

    #[test]
    fn parses_calculator_json() {
        let input =
            ToolInput::from_json(ToolKind::Calculator, &json!({"a": 10, "b": 4, "op": "divide"}))
                .unwrap();
        assert_eq!(
            input,
            ToolInput::Calculator {
                a: 10.0,
                b: 4.0,
                op: Operation::Divide
            }
        );
    }

    #[test]
    fn rejects_unknown_operation() {
        let err = ToolInput::from_json(ToolKind::Calculator, &json!({"a": 1, "b": 2, "op": "pow"}))
            .unwrap_err();
        assert!(matches!(err, ChatError::InvalidArguments(_)));
    }

    #[test]
    fn rejects_missing_query() {
        let err = ToolInput::from_json(ToolKind::WebSearch, &json!({})).unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn rejects_non_object_arguments() {
        let err = ToolInput::from_json(ToolKind::WebSearch, &json!("rust")).unwrap_err();
        assert!(matches!(err, ChatError::InvalidArguments(_)));
    }

    #[test]
    fn current_time_accepts_null() {
        let input = ToolInput::from_json(ToolKind::CurrentTime, &Value::Null).unwrap();
        assert_eq!(input, ToolInput::CurrentTime);
        assert!(input.args().is_empty());
    }
}
