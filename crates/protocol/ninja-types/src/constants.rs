//! Constants shared by the request model and the validation rules.
//!
//! Key names are the exact JSON keys the API accepts. They are matched
//! case-sensitively: `IDs` is not `ids`.

use crate::enums::ALObjectType;

// =============================================================================
// Range Keys
// =============================================================================

/// Start key of a `Range` object
pub const RANGE_FROM_KEY: &str = "from";

/// End key of a `Range` object
pub const RANGE_TO_KEY: &str = "to";

// =============================================================================
// Per-App Group Keys
// =============================================================================

/// Application identifier key of a per-app ID group
pub const APP_ID_KEY: &str = "appId";

/// Object IDs key of a per-app ID group
pub const IDS_KEY: &str = "ids";

// =============================================================================
// Extension Keys
// =============================================================================

/// Separator between an object type and its parent object ID in
/// extended keys such as `table_50000`.
pub const EXTENSION_SEPARATOR: char = '_';

/// Smallest parent object ID accepted in an extended key.
pub const MIN_EXTENSION_INDEX: u32 = 1;

/// Object types whose child IDs (fields, enum values) are tracked per
/// parent object and therefore accept an extended key.
pub const EXTENDABLE_OBJECT_TYPES: &[ALObjectType] = &[
    ALObjectType::Table,
    ALObjectType::TableExtension,
    ALObjectType::Enum,
    ALObjectType::EnumExtension,
];
