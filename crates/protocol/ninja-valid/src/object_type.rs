//! `ALObjectType` validation.

use ninja_types::ALObjectType;
use serde_json::Value;

use crate::error::{Mismatch, PredicateResult};
use crate::primitive::json_kind;

/// Validate an `ALObjectType` value: a string naming a known object type.
///
/// # Example
///
/// ```
/// use ninja_valid::validate_object_type;
/// use serde_json::json;
///
/// assert!(validate_object_type(&json!("codeunit")).is_ok());
/// assert!(validate_object_type(&json!("unitcode")).is_err());
/// assert!(validate_object_type(&json!(3.14)).is_err());
/// ```
pub fn validate_object_type(value: &Value) -> PredicateResult {
    let name = value.as_str().ok_or_else(|| {
        Mismatch::new(format!(
            "expected an object type name, got {}",
            json_kind(value)
        ))
    })?;
    name.parse::<ALObjectType>()
        .map(|_| ())
        .map_err(|e| Mismatch::new(e.to_string()))
}

/// Returns true if the value is a valid `ALObjectType`.
pub fn is_object_type(value: &Value) -> bool {
    validate_object_type(value).is_ok()
}
