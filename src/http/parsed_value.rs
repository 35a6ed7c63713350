use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        write!(f, "{}", name)
    }
}

/// A response body after parsing, tagged by its top-level shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Object(Map<String, Value>),
    Array(Vec<Value>),
    Other(Value),
}

impl ParsedValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ParsedValue::Object(_) => ValueKind::Object,
            ParsedValue::Array(_) => ValueKind::Array,
            ParsedValue::Other(Value::Null) => ValueKind::Null,
            ParsedValue::Other(Value::Bool(_)) => ValueKind::Bool,
            ParsedValue::Other(Value::Number(_)) => ValueKind::Number,
            ParsedValue::Other(Value::String(_)) => ValueKind::String,
            // From<Value> never builds these, but a caller constructing
            // Other by hand can.
            ParsedValue::Other(Value::Array(_)) => ValueKind::Array,
            ParsedValue::Other(Value::Object(_)) => ValueKind::Object,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ParsedValue::Object(map) => Value::Object(map),
            ParsedValue::Array(vec) => Value::Array(vec),
            ParsedValue::Other(value) => value,
        }
    }

    /// Deserializes the parsed body into a caller-defined type.
    pub fn into_typed<T: DeserializeOwned>(self) -> std::result::Result<T, serde_json::Error> {
        serde_json::from_value(self.into_value())
    }
}

impl From<Value> for ParsedValue {
    fn from(value: Value) -> ParsedValue {
        match value {
            Value::Object(map) => ParsedValue::Object(map),
            Value::Array(vec) => ParsedValue::Array(vec),
            other => ParsedValue::Other(other),
        }
    }
}

/// Parses a fully received body. Strict JSON: trailing content after the
/// top-level value is an error, and so is an empty body.
pub fn parse(response_body: &str) -> std::result::Result<ParsedValue, serde_json::Error> {
    serde_json::from_str::<Value>(response_body).map(ParsedValue::from)
}
