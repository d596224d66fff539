//! Primitive JSON types.
//!
//! These are registered alongside the domain types so expectations can
//! declare plain fields (`"appId": "string"`) next to structured ones.

use serde_json::Value;

use crate::error::{Mismatch, PredicateResult};

/// Name of a JSON value's kind, for messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "fractional number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Built-in primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Any JSON string
    String,
    /// Any JSON number
    Number,
    /// A JSON number without a fractional part that fits in an `i64`
    Integer,
    /// `true` or `false`
    Boolean,
    /// Any JSON object
    Object,
    /// Any JSON array
    Array,
    /// Any value, including `null`
    Any,
}

impl Primitive {
    /// Every primitive type.
    pub const ALL: [Primitive; 7] = [
        Self::String,
        Self::Number,
        Self::Integer,
        Self::Boolean,
        Self::Object,
        Self::Array,
        Self::Any,
    ];

    /// Registered name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Any => "any",
        }
    }

    /// Description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::String => "JSON string",
            Self::Number => "JSON number",
            Self::Integer => "JSON number without a fractional part",
            Self::Boolean => "true or false",
            Self::Object => "JSON object",
            Self::Array => "JSON array",
            Self::Any => "any JSON value",
        }
    }

    /// Returns true if the value is of this kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => is_integer(value),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::Any => true,
        }
    }

    /// Check the value, naming the expected and actual kinds on failure.
    pub fn check(&self, value: &Value) -> PredicateResult {
        if self.matches(value) {
            Ok(())
        } else {
            Err(Mismatch::new(format!(
                "expected {}, got {}",
                self.name(),
                json_kind(value)
            )))
        }
    }
}

/// Returns true for JSON integers that fit in an `i64`.
///
/// `1.0` is not an integer: serde_json keeps it as a float.
pub fn is_integer(value: &Value) -> bool {
    value.is_i64()
}
