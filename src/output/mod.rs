//! Rendering command outcomes as text, JSON or tables

mod table;

use serde::Serialize;

pub use table::format_table;

/// Either a single string or a list of strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    List(Vec<String>),
}

/// The result of running one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub command: &'static str,
    pub input: Value,
    pub output: Value,
}

impl Outcome {
    pub fn new(command: &'static str, input: Value, output: Value) -> Self {
        Self {
            command,
            input,
            output,
        }
    }
}

/// Format an outcome as plain text: the output value, one list item per line
pub fn format_text(outcome: &Outcome) -> String {
    match &outcome.output {
        Value::Text(text) => format!("{}\n", text),
        Value::List(items) => items.iter().map(|item| format!("{}\n", item)).collect(),
    }
}

/// Format an outcome as JSON
pub fn format_json(outcome: &Outcome) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
}
