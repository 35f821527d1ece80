//! Runtime type tag of a working-memory element.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four element kinds a working-memory graph can hold.
///
/// Reasoning runtimes report these as strings (`"id"`, `"int"`,
/// `"float"`, `"string"`); [`ValueType::as_str`] reproduces those names so
/// diagnostics read the same as the runtime's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// An identifier: owns attribute-named children.
    #[serde(rename = "id")]
    Identifier,
    Int,
    Float,
    String,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Identifier => "id",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
        }
    }

    pub fn is_identifier(&self) -> bool { matches!(self, ValueType::Identifier) }
    pub fn is_numeric(&self) -> bool { matches!(self, ValueType::Int | ValueType::Float) }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
