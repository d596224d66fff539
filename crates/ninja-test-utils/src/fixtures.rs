//! Request body fixtures.
//!
//! Valid and invalid values for each built-in domain type, as exercised by
//! the Object ID Ninja API endpoints.

use serde_json::{json, Value};

/// Wrap a value as the only field of a request body.
pub fn body(field: &str, value: Value) -> Value {
    let mut object = serde_json::Map::new();
    object.insert(field.to_string(), value);
    Value::Object(object)
}

// =============================================================================
// Range
// =============================================================================

/// A well-formed range.
pub fn valid_range() -> Value {
    json!({ "from": 12, "to": 15 })
}

/// A range whose end key is `until` instead of `to`.
pub fn range_with_until() -> Value {
    json!({ "from": 1, "until": 2 })
}

/// A bare number where a structured value is expected.
pub fn scalar() -> Value {
    json!(3.14)
}

// =============================================================================
// ALObjectType
// =============================================================================

/// Object types that are all recognized.
pub fn valid_object_types() -> Value {
    json!(["codeunit", "table", "page"])
}

/// Object types with one typo in the middle.
pub fn object_types_with_typo() -> Value {
    json!(["codeunit", "unitcode", "page"])
}

// =============================================================================
// ObjectIDs
// =============================================================================

/// IDs keyed by bare object types.
pub fn valid_object_ids() -> Value {
    json!({ "codeunit": [12, 13], "table": [15, 16] })
}

/// IDs keyed by extendable types with parent object IDs.
pub fn extended_object_ids() -> Value {
    json!({
        "table_1": [12, 13],
        "tableextension_2": [15, 16],
        "enum_1": [12, 13],
        "enumextension_2": [15, 16]
    })
}

/// IDs with a scalar value and non-integer elements.
pub fn object_ids_with_bad_values() -> Value {
    json!({ "codeunit": 1, "table": [1, "apple", "orange"] })
}

/// IDs keyed by an unknown object type.
pub fn object_ids_with_unknown_type() -> Value {
    json!({ "codeunit": [1, 2], "record": [1, 2] })
}

/// IDs keyed by an extended type with parent ID zero.
pub fn object_ids_with_zero_parent() -> Value {
    json!({ "codeunit": [1, 2], "table_0": [1, 2] })
}

/// IDs keyed by a type that cannot carry a parent ID.
pub fn object_ids_with_non_extendable_parent() -> Value {
    json!({ "codeunit": [1, 2], "codeunit_1": [1, 2] })
}

// =============================================================================
// PerAppObjectIDs
// =============================================================================

/// Two well-formed app groups.
pub fn valid_per_app_object_ids() -> Value {
    json!([
        { "appId": "app1", "ids": { "codeunit": [1, 2], "table": [1, 2] } },
        { "appId": "app2", "ids": { "codeunit": [1, 2], "page": [1, 2] } }
    ])
}

/// Groups using `test`/`mock` instead of `appId`.
pub fn per_app_with_wrong_app_key() -> Value {
    json!([
        { "test": "app1", "ids": { "codeunit": [1, 2], "table": [1, 2] } },
        { "mock": "app2", "ids": "apple" }
    ])
}

/// Groups using `IDs` instead of `ids`.
pub fn per_app_with_wrong_ids_case() -> Value {
    json!([
        { "appId": "app1", "IDs": { "codeunit": [1, 2], "table": [1, 2] } },
        { "appId": "app2", "IDs": { "codeunit": [1, 2], "page": [1, 2] } }
    ])
}

/// A group whose `ids` is a string.
pub fn per_app_with_string_ids() -> Value {
    json!([
        { "appId": "app1", "ids": { "codeunit": [1, 2], "table": [1, 2] } },
        { "appId": "app2", "ids": "apple" }
    ])
}

/// A group whose `ids` names an unknown object type.
pub fn per_app_with_unknown_type() -> Value {
    json!([
        { "appId": "app1", "ids": { "codeunit": [1, 2], "table": [1, 2] } },
        { "appId": "app2", "ids": { "codeunit": [1, 2], "record": [1, 2] } }
    ])
}

/// A bare `ObjectIDs` value where an array of groups is expected.
pub fn per_app_unwrapped() -> Value {
    json!({ "codeunit": [1, 2], "table": [1, 2] })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_wraps_single_field() {
        assert_eq!(body("range", scalar()), json!({ "range": 3.14 }));
    }
}
