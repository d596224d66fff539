//! Type-tag request validation for Object ID Ninja.
//!
//! Request fields are declared with type names (`"Range"`,
//! `"ALObjectType[]"`, `"ObjectIDs?"`) that resolve against a
//! `TypeRegistry` of structural predicates. A `RequestValidator` checks a
//! request against those declarations and reports the first failure, or
//! every failure in collect mode.
//!
//! # Built-in Types
//!
//! - **Primitives**: `string`, `number`, `integer`, `boolean`, `object`,
//!   `array`, `any`
//! - **Range**: `{ "from": number, "to": number }`, no other keys
//! - **ALObjectType**: one of the AL object type keywords
//! - **ObjectIDs**: object type (or `<type>_<parentId>`) to integer IDs
//! - **PerAppObjectIDs**: array of `{ "appId": string, "ids": ObjectIDs }`
//!
//! Any type can be wrapped as an array (`T[]`, nestable) and the outermost
//! type can be marked optional (`T?`).
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use ninja_types::{Request, RequestSection};
//! use ninja_valid::{RequestValidator, TypeRegistry, ValidationError, Validator};
//! use serde_json::json;
//!
//! let registry = Arc::new(TypeRegistry::with_builtins());
//! let mut validator = RequestValidator::new(registry);
//! validator
//!     .expect(RequestSection::Body, [("ObjectIDs", "ObjectIDs")])
//!     .unwrap();
//!
//! let request = Request::new(
//!     "GET",
//!     json!({ "ObjectIDs": { "codeunit": [1, 2], "table_0": [1, 2] } }),
//! );
//!
//! match validator.validate(&request) {
//!     Ok(()) => unreachable!(),
//!     Err(ValidationError::ShapeMismatch { path, .. }) => {
//!         assert_eq!(path, "body.ObjectIDs.table_0");
//!     }
//!     Err(e) => panic!("unexpected error: {}", e),
//! }
//! ```
//!
//! # Custom Types
//!
//! ```
//! use ninja_valid::TypeRegistry;
//! use serde_json::{json, Value};
//!
//! let mut registry = TypeRegistry::with_builtins();
//! registry.register_fn("AppId", |v: &Value| v.as_str().is_some_and(|s| !s.is_empty()));
//!
//! let resolved = registry.resolve_str("AppId[]").unwrap();
//! assert!(resolved.check(&json!(["app1", "app2"])).is_ok());
//! assert!(resolved.check(&json!(["app1", ""])).is_err());
//! ```

pub mod error;
pub mod expectation;
pub mod inject;
pub mod object_ids;
pub mod object_type;
pub mod per_app;
pub mod primitive;
pub mod range;
pub mod registry;
pub mod type_name;
pub mod validator;

// Re-export main types
pub use error::{Mismatch, PredicateResult, ValidationError, ValidationReport, ValidationResult};
pub use expectation::{Expectations, FieldExpectation};
pub use registry::{ResolvedType, TypeEntry, TypePredicate, TypeRegistry};
pub use type_name::TypeName;

// Re-export built-in predicates
pub use inject::{
    inject_validators, TYPE_AL_OBJECT_TYPE, TYPE_OBJECT_IDS, TYPE_PER_APP_OBJECT_IDS, TYPE_RANGE,
};
pub use object_ids::{is_object_ids, validate_id_list, validate_object_ids};
pub use object_type::{is_object_type, validate_object_type};
pub use per_app::{is_per_app_object_ids, validate_app_group, validate_per_app_object_ids};
pub use primitive::{json_kind, Primitive};
pub use range::{is_range, validate_range};

// Re-export validator trait and implementation
pub use validator::{RequestValidator, ValidationMode, Validator, ValidatorConfig};
