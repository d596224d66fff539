//! End-to-end request validation against the built-in types.
//!
//! Each test injects the built-in validators into a fresh registry, declares
//! one body field and validates a mock `GET` request.

use std::sync::Arc;

use ninja_test_utils::*;
use ninja_types::{AppObjectIds, ErrorCode, ObjectIds, Range, RequestSection};
use ninja_valid::{
    inject_validators, RequestValidator, TypeRegistry, ValidationError, ValidationMode,
    Validator, ValidatorConfig,
};
use serde_json::{json, Value};

fn registry() -> Arc<TypeRegistry> {
    let mut registry = TypeRegistry::new();
    inject_validators(&mut registry);
    Arc::new(registry)
}

fn validate_body(field: &str, type_name: &str, value: Value) -> Result<(), ValidationError> {
    let mut validator = RequestValidator::new(registry());
    validator
        .expect(RequestSection::Body, [(field, type_name)])
        .expect("built-in type should resolve");
    let request = MockRequest::new("GET", body(field, value)).build();
    validator.validate(&request)
}

fn assert_rejected(field: &str, type_name: &str, value: Value) -> ValidationError {
    let err = validate_body(field, type_name, value).expect_err("value should be rejected");
    assert_eq!(err.error_code(), ErrorCode::InvalidShape, "{}", err);
    err
}

// =============================================================================
// Range
// =============================================================================

#[test]
fn test_range_rejects_scalar() {
    assert_rejected("range", "Range", scalar());
}

#[test]
fn test_range_rejects_until_key() {
    assert_rejected("range", "Range", range_with_until());
}

#[test]
fn test_range_accepts_from_to() {
    assert!(validate_body("range", "Range", valid_range()).is_ok());
}

// =============================================================================
// ALObjectType
// =============================================================================

#[test]
fn test_object_type_rejects_number() {
    assert_rejected("ALObjectType", "ALObjectType", scalar());
}

#[test]
fn test_object_type_array_rejects_one_typo() {
    let err = assert_rejected("ALObjectType", "ALObjectType[]", object_types_with_typo());
    match err {
        ValidationError::ShapeMismatch { path, expected, .. } => {
            assert_eq!(path, "body.ALObjectType[1]");
            assert_eq!(expected, "ALObjectType[]");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_object_type_array_accepts_known_types() {
    assert!(validate_body("ALObjectType", "ALObjectType[]", valid_object_types()).is_ok());
}

// =============================================================================
// ObjectIDs
// =============================================================================

#[test]
fn test_object_ids_rejects_scalar() {
    assert_rejected("ObjectIDs", "ObjectIDs", scalar());
}

#[test]
fn test_object_ids_rejects_non_integer_values() {
    assert_rejected("ObjectIDs", "ObjectIDs", object_ids_with_bad_values());
}

#[test]
fn test_object_ids_rejects_record() {
    assert_rejected("ObjectIDs", "ObjectIDs", object_ids_with_unknown_type());
}

#[test]
fn test_object_ids_rejects_zero_parent() {
    let err = assert_rejected("ObjectIDs", "ObjectIDs", object_ids_with_zero_parent());
    match err {
        ValidationError::ShapeMismatch { path, .. } => {
            assert_eq!(path, "body.ObjectIDs.table_0");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_object_ids_rejects_codeunit_parent() {
    assert_rejected(
        "ObjectIDs",
        "ObjectIDs",
        object_ids_with_non_extendable_parent(),
    );
}

#[test]
fn test_object_ids_accepts_bare_types() {
    assert!(validate_body("ObjectIDs", "ObjectIDs", valid_object_ids()).is_ok());
}

#[test]
fn test_object_ids_accepts_extended_types() {
    assert!(validate_body("ObjectIDs", "ObjectIDs", extended_object_ids()).is_ok());
}

// =============================================================================
// PerAppObjectIDs
// =============================================================================

#[test]
fn test_per_app_rejects_bare_object_ids() {
    assert_rejected(
        "PerAppObjectIDs",
        "PerAppObjectIDs",
        object_ids_with_bad_values(),
    );
    assert_rejected("PerAppObjectIDs", "PerAppObjectIDs", per_app_unwrapped());
}

#[test]
fn test_per_app_rejects_missing_app_id() {
    assert_rejected(
        "PerAppObjectIDs",
        "PerAppObjectIDs",
        per_app_with_wrong_app_key(),
    );
}

#[test]
fn test_per_app_rejects_missing_ids() {
    assert_rejected(
        "PerAppObjectIDs",
        "PerAppObjectIDs",
        per_app_with_wrong_ids_case(),
    );
}

#[test]
fn test_per_app_rejects_string_ids() {
    assert_rejected("PerAppObjectIDs", "PerAppObjectIDs", per_app_with_string_ids());
}

#[test]
fn test_per_app_rejects_unknown_nested_type() {
    let err = assert_rejected(
        "PerAppObjectIDs",
        "PerAppObjectIDs",
        per_app_with_unknown_type(),
    );
    match err {
        ValidationError::ShapeMismatch { path, .. } => {
            assert_eq!(path, "body.PerAppObjectIDs[1].ids.record");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_per_app_accepts_groups() {
    assert!(validate_body(
        "PerAppObjectIDs",
        "PerAppObjectIDs",
        valid_per_app_object_ids()
    )
    .is_ok());
}

// =============================================================================
// Registry and expectations
// =============================================================================

#[test]
fn test_repeated_injection_gives_same_outcomes() {
    let mut registry = TypeRegistry::new();
    for _ in 0..5 {
        inject_validators(&mut registry);
    }
    let repeated = Arc::new(registry);
    let once = self::registry();

    let cases = [
        ("Range", valid_range()),
        ("Range", range_with_until()),
        ("ALObjectType[]", object_types_with_typo()),
        ("ObjectIDs", extended_object_ids()),
        ("ObjectIDs", object_ids_with_zero_parent()),
        ("PerAppObjectIDs", valid_per_app_object_ids()),
        ("PerAppObjectIDs", per_app_with_unknown_type()),
    ];
    for (type_name, value) in cases {
        let outcome = |registry: &Arc<TypeRegistry>| {
            let mut validator = RequestValidator::new(Arc::clone(registry));
            validator
                .expect(RequestSection::Body, [("field", type_name)])
                .unwrap();
            validator
                .validate(&MockRequest::get(body("field", value.clone())).build())
                .is_ok()
        };
        assert_eq!(outcome(&once), outcome(&repeated), "{}", type_name);
    }
    assert_eq!(once.len(), repeated.len());
}

#[test]
fn test_unknown_type_fails_at_expect() {
    let mut validator = RequestValidator::new(registry());
    let err = validator
        .expect(RequestSection::Body, [("ids", "ObjectIds")])
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownType {
            name: "ObjectIds".into()
        }
    );
    assert_eq!(err.error_code(), ErrorCode::UnknownType);
    assert_eq!(err.error_code().http_status(), 500);
}

#[test]
fn test_missing_required_field() {
    let mut validator = RequestValidator::new(registry());
    validator
        .expect(RequestSection::Body, [("range", "Range")])
        .unwrap();
    let err = validator
        .validate(&MockRequest::get(json!({ "other": 1 })).build())
        .unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::MissingField);
    assert_eq!(err.error_code().http_status(), 400);
}

#[test]
fn test_optional_field() {
    let mut validator = RequestValidator::new(registry());
    validator
        .expect(RequestSection::Body, [("range", "Range?")])
        .unwrap();

    assert!(validator.validate(&MockRequest::get(json!({})).build()).is_ok());
    assert!(validator
        .validate(&MockRequest::get(body("range", valid_range())).build())
        .is_ok());
    assert!(validator
        .validate(&MockRequest::get(body("range", range_with_until())).build())
        .is_err());
    assert!(validator
        .validate(&MockRequest::get(json!({ "range": null })).build())
        .is_err());
}

#[test]
fn test_last_expectation_wins() {
    let mut validator = RequestValidator::new(registry());
    validator
        .expect(RequestSection::Body, [("value", "Range")])
        .unwrap()
        .expect(RequestSection::Body, [("value", "ObjectIDs")])
        .unwrap();

    let request = MockRequest::get(body("value", valid_object_ids())).build();
    assert!(validator.validate(&request).is_ok());
    assert_eq!(validator.expectations().len(), 1);
}

#[test]
fn test_collect_mode_reports_every_field_in_order() {
    let config = ValidatorConfig::new().with_mode(ValidationMode::Collect);
    let mut validator = RequestValidator::with_config(registry(), config);
    validator
        .expect(
            RequestSection::Body,
            [
                ("range", "Range"),
                ("types", "ALObjectType[]"),
                ("ids", "ObjectIDs"),
                ("apps", "PerAppObjectIDs"),
            ],
        )
        .unwrap()
        .expect(RequestSection::Query, [("appId", "string")])
        .unwrap();

    let request = MockRequest::get(json!({
        "range": range_with_until(),
        "types": valid_object_types(),
        "ids": object_ids_with_zero_parent(),
    }))
    .build();

    let report = validator.check(&request).unwrap_err();
    let paths: Vec<String> = report
        .errors()
        .iter()
        .map(|e| match e {
            ValidationError::ShapeMismatch { path, .. } => path.clone(),
            ValidationError::MissingField { section, field } => format!("{}.{}", section, field),
            other => panic!("unexpected error: {:?}", other),
        })
        .collect();
    assert_eq!(
        paths,
        vec!["body.range", "body.ids.table_0", "body.apps", "query.appId"]
    );

    // Fail-fast stops at the first one.
    let err = validator.validate(&request).unwrap_err();
    assert_eq!(&err, report.first());
}

#[test]
fn test_query_and_params_sections() {
    let mut validator = RequestValidator::new(registry());
    validator
        .expect(RequestSection::Query, [("appId", "string")])
        .unwrap()
        .expect(RequestSection::Params, [("type", "ALObjectType")])
        .unwrap();

    let ok = MockRequest::get(json!(null))
        .with_query("appId", "app1")
        .with_param("type", "tableextension")
        .build();
    assert!(validator.validate(&ok).is_ok());

    let bad = MockRequest::get(json!(null))
        .with_query("appId", "app1")
        .with_param("type", "unitcode")
        .build();
    assert!(validator.validate(&bad).is_err());
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = registry();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let mut validator = RequestValidator::new(registry);
                validator
                    .expect(RequestSection::Body, [("apps", "PerAppObjectIDs")])
                    .unwrap();
                validator
                    .validate(&MockRequest::get(body("apps", valid_per_app_object_ids())).build())
                    .is_ok()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

// =============================================================================
// Typed deserialization agrees with validation
// =============================================================================

#[test]
fn test_valid_values_deserialize_into_domain_types() {
    assert!(serde_json::from_value::<Range>(valid_range()).is_ok());
    assert!(serde_json::from_value::<ObjectIds>(valid_object_ids()).is_ok());
    assert!(serde_json::from_value::<ObjectIds>(extended_object_ids()).is_ok());
    assert!(serde_json::from_value::<Vec<AppObjectIds>>(valid_per_app_object_ids()).is_ok());
}

#[test]
fn test_invalid_values_do_not_deserialize() {
    assert!(serde_json::from_value::<Range>(range_with_until()).is_err());
    assert!(serde_json::from_value::<ObjectIds>(object_ids_with_zero_parent()).is_err());
    assert!(serde_json::from_value::<ObjectIds>(object_ids_with_unknown_type()).is_err());
    assert!(
        serde_json::from_value::<ObjectIds>(object_ids_with_non_extendable_parent()).is_err()
    );
    assert!(serde_json::from_value::<Vec<AppObjectIds>>(per_app_with_wrong_ids_case()).is_err());
}
