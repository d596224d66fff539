//! `Range` validation.
//!
//! A range is an object with exactly two numeric keys, `from` and `to`.
//! Any other key (`until`, `start`) is rejected rather than ignored.

use ninja_types::{RANGE_FROM_KEY, RANGE_TO_KEY};
use serde_json::Value;

use crate::error::{Mismatch, PredicateResult};
use crate::primitive::json_kind;

/// Validate a `Range` value.
///
/// Checks, in order:
/// 1. The value is an object
/// 2. It has no keys other than `from` and `to`
/// 3. Both `from` and `to` are present and numeric
///
/// # Example
///
/// ```
/// use ninja_valid::validate_range;
/// use serde_json::json;
///
/// assert!(validate_range(&json!({ "from": 12, "to": 15 })).is_ok());
/// assert!(validate_range(&json!({ "from": 1, "until": 2 })).is_err());
/// assert!(validate_range(&json!(3.14)).is_err());
/// ```
pub fn validate_range(value: &Value) -> PredicateResult {
    let object = value.as_object().ok_or_else(|| {
        Mismatch::new(format!(
            "expected an object with '{}' and '{}', got {}",
            RANGE_FROM_KEY,
            RANGE_TO_KEY,
            json_kind(value)
        ))
    })?;

    if let Some(key) = object
        .keys()
        .find(|key| key.as_str() != RANGE_FROM_KEY && key.as_str() != RANGE_TO_KEY)
    {
        return Err(Mismatch::new(format!("unexpected key '{}'", key)));
    }

    for key in [RANGE_FROM_KEY, RANGE_TO_KEY] {
        match object.get(key) {
            None => return Err(Mismatch::new(format!("missing key '{}'", key))),
            Some(bound) if !bound.is_number() => {
                return Err(Mismatch::new(format!(
                    "expected a number, got {}",
                    json_kind(bound)
                ))
                .at_key(key));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Returns true if the value is a valid `Range`.
pub fn is_range(value: &Value) -> bool {
    validate_range(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_ranges() {
        assert!(is_range(&json!({ "from": 12, "to": 15 })));
        assert!(is_range(&json!({ "to": 15, "from": 12 })));
        assert!(is_range(&json!({ "from": 1.5, "to": -2 })));
    }

    #[test]
    fn test_scalar_rejected() {
        let mismatch = validate_range(&json!(3.14)).unwrap_err();
        assert!(mismatch.reason.contains("got fractional number"));
        assert!(!is_range(&json!("1-2")));
        assert!(!is_range(&json!([1, 2])));
        assert!(!is_range(&json!(null)));
    }

    #[test]
    fn test_renamed_end_key_rejected() {
        let mismatch = validate_range(&json!({ "from": 1, "until": 2 })).unwrap_err();
        assert_eq!(mismatch.reason, "unexpected key 'until'");
    }

    #[test]
    fn test_extra_key_rejected() {
        assert!(!is_range(&json!({ "from": 1, "to": 2, "step": 1 })));
    }

    #[test]
    fn test_missing_key_rejected() {
        let mismatch = validate_range(&json!({ "from": 1 })).unwrap_err();
        assert_eq!(mismatch.reason, "missing key 'to'");
        assert!(!is_range(&json!({})));
    }

    #[test]
    fn test_non_numeric_bound_rejected() {
        let mismatch = validate_range(&json!({ "from": "1", "to": 2 })).unwrap_err();
        assert_eq!(mismatch.location, ".from");
        assert!(!is_range(&json!({ "from": 1, "to": null })));
    }
}
