//! `ObjectIDs` validation.
//!
//! An `ObjectIDs` value maps object ID keys to arrays of integer IDs:
//!
//! ```json
//! { "codeunit": [50100, 50101], "table_50100": [1, 2, 3] }
//! ```
//!
//! Keys follow the `ObjectIdKey` rules from `ninja-types`: a bare object
//! type, or an extendable type (`table`, `tableextension`, `enum`,
//! `enumextension`) followed by `_` and a positive parent object ID.
//! One bad key or one bad element rejects the whole value.

use ninja_types::ObjectIdKey;
use serde_json::Value;

use crate::error::{Mismatch, PredicateResult};
use crate::primitive::{is_integer, json_kind};

/// Validate an `ObjectIDs` value.
///
/// # Example
///
/// ```
/// use ninja_valid::validate_object_ids;
/// use serde_json::json;
///
/// assert!(validate_object_ids(&json!({ "codeunit": [12, 13], "table_1": [1] })).is_ok());
/// assert!(validate_object_ids(&json!({ "table_0": [1, 2] })).is_err());
/// assert!(validate_object_ids(&json!({ "codeunit_1": [1, 2] })).is_err());
/// ```
pub fn validate_object_ids(value: &Value) -> PredicateResult {
    let object = value.as_object().ok_or_else(|| {
        Mismatch::new(format!(
            "expected an object mapping object types to ID arrays, got {}",
            json_kind(value)
        ))
    })?;

    for (key, ids) in object {
        key.parse::<ObjectIdKey>()
            .map_err(|e| Mismatch::new(e.to_string()).at_key(key))?;
        validate_id_list(ids).map_err(|m| m.at_key(key))?;
    }

    Ok(())
}

/// Returns true if the value is a valid `ObjectIDs`.
pub fn is_object_ids(value: &Value) -> bool {
    validate_object_ids(value).is_ok()
}

/// Validate an array of integer IDs. An empty array is valid.
pub fn validate_id_list(value: &Value) -> PredicateResult {
    let ids = value.as_array().ok_or_else(|| {
        Mismatch::new(format!(
            "expected an array of integers, got {}",
            json_kind(value)
        ))
    })?;

    match ids.iter().position(|id| !is_integer(id)) {
        Some(index) => Err(Mismatch::new(format!(
            "expected an integer, got {}",
            json_kind(&ids[index])
        ))
        .at_index(index)),
        None => Ok(()),
    }
}
