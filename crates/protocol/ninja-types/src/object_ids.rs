//! Object ID collections.
//!
//! An `ObjectIds` map groups reserved IDs by `ObjectIdKey`. A key is either
//! a bare object type (`codeunit`) or an extendable type qualified with the
//! ID of its parent object (`table_50000` holds field IDs of table 50000).

use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::EXTENSION_SEPARATOR;
use crate::enums::ALObjectType;
use crate::error::TypeError;

/// Key of an `ObjectIds` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectIdKey {
    /// Object type the IDs belong to
    pub object_type: ALObjectType,
    /// Parent object ID for extended keys
    pub parent: Option<NonZeroU32>,
}

impl ObjectIdKey {
    /// Key for IDs of the object type itself.
    pub fn bare(object_type: ALObjectType) -> Self {
        Self {
            object_type,
            parent: None,
        }
    }

    /// Key for child IDs of a specific parent object.
    pub fn extended(object_type: ALObjectType, parent: NonZeroU32) -> Result<Self, TypeError> {
        if !object_type.is_extendable() {
            return Err(TypeError::NotExtendable { object_type });
        }
        Ok(Self {
            object_type,
            parent: Some(parent),
        })
    }

    /// Returns true if this key carries a parent object ID.
    pub fn is_extended(&self) -> bool {
        self.parent.is_some()
    }
}

/// Parse the parent object ID of an extended key.
///
/// Accepts decimal digits only, with no sign and no leading zero, so
/// `0`, `01` and `+1` are all rejected.
fn parse_parent_id(digits: &str) -> Option<NonZeroU32> {
    if digits.is_empty() || digits.starts_with('0') {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().and_then(NonZeroU32::new)
}

impl FromStr for ObjectIdKey {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(object_type) = s.parse::<ALObjectType>() {
            return Ok(Self::bare(object_type));
        }

        let Some((base, suffix)) = s.rsplit_once(EXTENSION_SEPARATOR) else {
            return Err(TypeError::UnknownObjectType {
                value: s.to_string(),
            });
        };

        let object_type: ALObjectType = base.parse()?;
        if !object_type.is_extendable() {
            return Err(TypeError::NotExtendable { object_type });
        }

        let parent = parse_parent_id(suffix).ok_or_else(|| TypeError::InvalidExtensionIndex {
            key: s.to_string(),
        })?;

        Ok(Self {
            object_type,
            parent: Some(parent),
        })
    }
}

impl TryFrom<String> for ObjectIdKey {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ObjectIdKey> for String {
    fn from(key: ObjectIdKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for ObjectIdKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parent {
            Some(parent) => write!(f, "{}{}{}", self.object_type, EXTENSION_SEPARATOR, parent),
            None => write!(f, "{}", self.object_type),
        }
    }
}

/// Reserved IDs grouped by object type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectIds(pub BTreeMap<ObjectIdKey, Vec<i64>>);

impl ObjectIds {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add IDs under a key, appending to any already present.
    pub fn with_ids(mut self, key: ObjectIdKey, ids: impl IntoIterator<Item = i64>) -> Self {
        self.0.entry(key).or_default().extend(ids);
        self
    }

    /// IDs stored under a key.
    pub fn get(&self, key: &ObjectIdKey) -> Option<&[i64]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of IDs across all keys.
    pub fn id_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// Object IDs reported for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppObjectIds {
    /// Application identifier (the `id` from `app.json`)
    #[serde(rename = "appId")]
    pub app_id: String,
    /// IDs used by the application
    pub ids: ObjectIds,
}

impl AppObjectIds {
    /// Create a group for an application.
    pub fn new(app_id: impl Into<String>, ids: ObjectIds) -> Self {
        Self {
            app_id: app_id.into(),
            ids,
        }
    }
}

/// Numeric ID range. Bounds are kept as supplied; ordering is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Range {
    /// First ID of the range
    pub from: f64,
    /// Last ID of the range
    pub to: f64,
}

impl Range {
    /// Create a range.
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Returns true if `id` lies between the bounds, inclusive.
    pub fn contains(&self, id: f64) -> bool {
        let (low, high) = if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        (low..=high).contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Result<ObjectIdKey, TypeError> {
        s.parse()
    }

    #[test]
    fn test_bare_keys() {
        for object_type in ALObjectType::ALL {
            let parsed = key(object_type.as_str()).unwrap();
            assert_eq!(parsed, ObjectIdKey::bare(object_type));
            assert!(!parsed.is_extended());
        }
    }

    #[test]
    fn test_extended_keys() {
        let parsed = key("table_1").unwrap();
        assert_eq!(parsed.object_type, ALObjectType::Table);
        assert_eq!(parsed.parent.map(NonZeroU32::get), Some(1));

        let parsed = key("enumextension_50100").unwrap();
        assert_eq!(parsed.object_type, ALObjectType::EnumExtension);
        assert_eq!(parsed.to_string(), "enumextension_50100");
    }

    #[test]
    fn test_zero_and_malformed_suffixes_rejected() {
        assert!(matches!(
            key("table_0"),
            Err(TypeError::InvalidExtensionIndex { .. })
        ));
        assert!(key("table_01").is_err());
        assert!(key("table_").is_err());
        assert!(key("table_+1").is_err());
        assert!(key("table_-1").is_err());
        assert!(key("table_1a").is_err());
        assert!(key("table_99999999999").is_err());
    }

    #[test]
    fn test_non_extendable_suffix_rejected() {
        assert_eq!(
            key("codeunit_1"),
            Err(TypeError::NotExtendable {
                object_type: ALObjectType::Codeunit
            })
        );
        assert!(key("pageextension_1").is_err());
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(matches!(
            key("record"),
            Err(TypeError::UnknownObjectType { .. })
        ));
        assert!(matches!(
            key("record_1"),
            Err(TypeError::UnknownObjectType { .. })
        ));
    }

    #[test]
    fn test_extended_constructor_checks_type() {
        let one = NonZeroU32::new(1).unwrap();
        assert!(ObjectIdKey::extended(ALObjectType::Table, one).is_ok());
        assert!(ObjectIdKey::extended(ALObjectType::Report, one).is_err());
    }

    #[test]
    fn test_object_ids_deserialize() {
        let json = serde_json::json!({
            "codeunit": [12, 13],
            "table_1": [15, 16]
        });
        let ids: ObjectIds = serde_json::from_value(json).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids.id_count(), 4);
        assert_eq!(
            ids.get(&ObjectIdKey::bare(ALObjectType::Codeunit)),
            Some(&[12, 13][..])
        );
    }

    #[test]
    fn test_object_ids_reject_bad_keys() {
        let json = serde_json::json!({ "record": [1, 2] });
        assert!(serde_json::from_value::<ObjectIds>(json).is_err());
    }

    #[test]
    fn test_app_object_ids_rename() {
        let group = AppObjectIds::new(
            "app1",
            ObjectIds::new().with_ids(ObjectIdKey::bare(ALObjectType::Page), [1, 2]),
        );
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["appId"], "app1");
        assert_eq!(json["ids"]["page"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_app_object_ids_deny_unknown_fields() {
        let json = serde_json::json!({ "appId": "app1", "IDs": {} });
        assert!(serde_json::from_value::<AppObjectIds>(json).is_err());
    }

    #[test]
    fn test_range_contains() {
        let range = Range::new(50000.0, 50099.0);
        assert!(range.contains(50000.0));
        assert!(range.contains(50099.0));
        assert!(!range.contains(50100.0));
        assert!(Range::new(10.0, 1.0).contains(5.0));
    }
}
