//! `PerAppObjectIDs` validation.
//!
//! Per-app IDs are an array of groups, one per application:
//!
//! ```json
//! [
//!   { "appId": "app1", "ids": { "codeunit": [1, 2] } },
//!   { "appId": "app2", "ids": { "page": [1, 2] } }
//! ]
//! ```
//!
//! Each group has exactly the keys `appId` and `ids`. Key names are
//! case-sensitive and a bare `ObjectIDs` object is not accepted in place
//! of the array.

use ninja_types::{APP_ID_KEY, IDS_KEY};
use serde_json::Value;

use crate::error::{Mismatch, PredicateResult};
use crate::object_ids::validate_object_ids;
use crate::primitive::json_kind;

/// Validate a `PerAppObjectIDs` value.
pub fn validate_per_app_object_ids(value: &Value) -> PredicateResult {
    let groups = value.as_array().ok_or_else(|| {
        Mismatch::new(format!(
            "expected an array of {{ {}, {} }} groups, got {}",
            APP_ID_KEY,
            IDS_KEY,
            json_kind(value)
        ))
    })?;

    groups.iter().enumerate().try_for_each(|(index, group)| {
        validate_app_group(group).map_err(|m| m.at_index(index))
    })
}

/// Returns true if the value is a valid `PerAppObjectIDs`.
pub fn is_per_app_object_ids(value: &Value) -> bool {
    validate_per_app_object_ids(value).is_ok()
}

/// Validate a single `{ appId, ids }` group.
pub fn validate_app_group(value: &Value) -> PredicateResult {
    let group = value.as_object().ok_or_else(|| {
        Mismatch::new(format!(
            "expected an object with '{}' and '{}', got {}",
            APP_ID_KEY,
            IDS_KEY,
            json_kind(value)
        ))
    })?;

    if let Some(key) = group
        .keys()
        .find(|key| key.as_str() != APP_ID_KEY && key.as_str() != IDS_KEY)
    {
        return Err(Mismatch::new(format!("unexpected key '{}'", key)));
    }

    match group.get(APP_ID_KEY) {
        None => return Err(Mismatch::new(format!("missing key '{}'", APP_ID_KEY))),
        Some(app_id) if !app_id.is_string() => {
            return Err(Mismatch::new(format!(
                "expected a string, got {}",
                json_kind(app_id)
            ))
            .at_key(APP_ID_KEY));
        }
        Some(_) => {}
    }

    let ids = group
        .get(IDS_KEY)
        .ok_or_else(|| Mismatch::new(format!("missing key '{}'", IDS_KEY)))?;
    validate_object_ids(ids).map_err(|m| m.at_key(IDS_KEY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_groups() {
        assert!(is_per_app_object_ids(&json!([
            { "appId": "app1", "ids": { "codeunit": [1, 2], "table": [1, 2] } },
            { "appId": "app2", "ids": { "codeunit": [1, 2], "page": [1, 2] } }
        ])));
        assert!(is_per_app_object_ids(&json!([])));
    }

    #[test]
    fn test_bare_object_ids_rejected() {
        let mismatch = validate_per_app_object_ids(&json!({
            "codeunit": [1],
            "table": [1, 2]
        }))
        .unwrap_err();
        assert!(mismatch.reason.contains("got object"));
    }

    #[test]
    fn test_wrong_app_id_key_rejected() {
        let mismatch = validate_per_app_object_ids(&json!([
            { "test": "app1", "ids": { "codeunit": [1, 2], "table": [1, 2] } },
            { "mock": "app2", "ids": "apple" }
        ]))
        .unwrap_err();
        assert_eq!(mismatch.location, "[0]");
        assert_eq!(mismatch.reason, "unexpected key 'test'");
    }

    #[test]
    fn test_wrong_ids_case_rejected() {
        assert!(!is_per_app_object_ids(&json!([
            { "appId": "app1", "IDs": { "codeunit": [1, 2] } }
        ])));
    }

    #[test]
    fn test_invalid_nested_ids_rejected() {
        let mismatch = validate_per_app_object_ids(&json!([
            { "appId": "app1", "ids": { "codeunit": [1, 2], "table": [1, 2] } },
            { "appId": "app2", "ids": "apple" }
        ]))
        .unwrap_err();
        assert_eq!(mismatch.location, "[1].ids");

        let mismatch = validate_per_app_object_ids(&json!([
            { "appId": "app1", "ids": { "codeunit": [1, 2], "table": [1, 2] } },
            { "appId": "app2", "ids": { "codeunit": [1, 2], "record": [1, 2] } }
        ]))
        .unwrap_err();
        assert_eq!(mismatch.location, "[1].ids.record");
    }

    #[test]
    fn test_missing_keys_rejected() {
        let mismatch = validate_app_group(&json!({ "ids": {} })).unwrap_err();
        assert_eq!(mismatch.reason, "missing key 'appId'");
        let mismatch = validate_app_group(&json!({ "appId": "app1" })).unwrap_err();
        assert_eq!(mismatch.reason, "missing key 'ids'");
    }

    #[test]
    fn test_non_string_app_id_rejected() {
        let mismatch = validate_app_group(&json!({ "appId": 1, "ids": {} })).unwrap_err();
        assert_eq!(mismatch.location, ".appId");
    }
}
