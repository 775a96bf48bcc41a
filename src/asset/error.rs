//! Errors raised by the `v_asset` template helper.

use serde_json::Value;
use thiserror::Error;

/// Misuse of the helper. These are template bugs, not runtime conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelperError {
    #[error("{helper}(): argument `{argument}` must be {expected}, got {found}")]
    TypeMismatch {
        helper: &'static str,
        argument: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{helper}(): {reason}")]
    InvalidCall {
        helper: &'static str,
        reason: String,
    },
}

/// A helper error located in a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: `{call}`")]
pub struct HelperCallError {
    pub line: usize,
    pub call: String,
    #[source]
    pub source: HelperError,
}

/// Type name of a dynamic value, as shown in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
