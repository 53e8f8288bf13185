use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-defined metadata attached to a cell or a whole grid. Keys are free-form
/// strings chosen by the application.
pub type AttributeMap = HashMap<String, Attribute>;

/// A self-describing attribute value. Serializes untagged, so attribute maps
/// read and write as plain JSON objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attribute {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Attribute>),
    Object(HashMap<String, Attribute>),
}

impl Default for Attribute {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Attribute {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Attribute {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Attribute {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
