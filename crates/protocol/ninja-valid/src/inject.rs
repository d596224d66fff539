//! Built-in type injection.
//!
//! `inject_validators` populates a registry with the primitive JSON types
//! and the Object ID Ninja domain types. Array forms (`ALObjectType[]`)
//! need no registration: they are derived from the base type when a
//! `TypeName` is resolved.

use serde_json::Value;
use tracing::debug;

use crate::object_ids::validate_object_ids;
use crate::object_type::validate_object_type;
use crate::per_app::validate_per_app_object_ids;
use crate::primitive::Primitive;
use crate::range::validate_range;
use crate::registry::TypeRegistry;

/// Registered name of the range type.
pub const TYPE_RANGE: &str = "Range";

/// Registered name of the AL object type.
pub const TYPE_AL_OBJECT_TYPE: &str = "ALObjectType";

/// Registered name of the object IDs map.
pub const TYPE_OBJECT_IDS: &str = "ObjectIDs";

/// Registered name of the per-app object IDs list.
pub const TYPE_PER_APP_OBJECT_IDS: &str = "PerAppObjectIDs";

/// Register every built-in type.
///
/// Safe to call any number of times on the same registry: each call
/// overwrites the same entries with the same predicates.
pub fn inject_validators(registry: &mut TypeRegistry) {
    for primitive in Primitive::ALL {
        registry.register_described(
            primitive.name(),
            primitive.description(),
            move |value: &Value| primitive.check(value),
        );
    }

    registry
        .register_described(
            TYPE_RANGE,
            "object with numeric 'from' and 'to'",
            validate_range,
        )
        .register_described(
            TYPE_AL_OBJECT_TYPE,
            "AL object type keyword (codeunit, table, ...)",
            validate_object_type,
        )
        .register_described(
            TYPE_OBJECT_IDS,
            "map of object type (or <type>_<parentId>) to integer IDs",
            validate_object_ids,
        )
        .register_described(
            TYPE_PER_APP_OBJECT_IDS,
            "array of { appId, ids } groups",
            validate_per_app_object_ids,
        );

    debug!(types = registry.len(), "injected built-in validators");
}
