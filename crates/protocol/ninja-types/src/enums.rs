//! Enum types for the request model.
//!
//! `ALObjectType` is the closed set of AL object kinds that carry numeric
//! IDs. `RequestSection` names the parts of a request an expectation can
//! target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::EXTENDABLE_OBJECT_TYPES;
use crate::error::TypeError;

/// Kind of AL object that is assigned numeric IDs.
///
/// Serialized as the lowercase AL keyword (`codeunit`, `tableextension`).
/// Parsing is case-sensitive: the API only ever sends lowercase names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ALObjectType {
    /// Codeunit
    Codeunit,
    /// Enum
    Enum,
    /// Enum extension
    EnumExtension,
    /// Page
    Page,
    /// Page extension
    PageExtension,
    /// Permission set
    PermissionSet,
    /// Permission set extension
    PermissionSetExtension,
    /// Query
    Query,
    /// Report
    Report,
    /// Report extension
    ReportExtension,
    /// Table
    Table,
    /// Table extension
    TableExtension,
    /// XMLport
    XmlPort,
}

impl ALObjectType {
    /// Every object type, in alphabetical order of its keyword.
    pub const ALL: [ALObjectType; 13] = [
        Self::Codeunit,
        Self::Enum,
        Self::EnumExtension,
        Self::Page,
        Self::PageExtension,
        Self::PermissionSet,
        Self::PermissionSetExtension,
        Self::Query,
        Self::Report,
        Self::ReportExtension,
        Self::Table,
        Self::TableExtension,
        Self::XmlPort,
    ];

    /// The AL keyword for this object type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Codeunit => "codeunit",
            Self::Enum => "enum",
            Self::EnumExtension => "enumextension",
            Self::Page => "page",
            Self::PageExtension => "pageextension",
            Self::PermissionSet => "permissionset",
            Self::PermissionSetExtension => "permissionsetextension",
            Self::Query => "query",
            Self::Report => "report",
            Self::ReportExtension => "reportextension",
            Self::Table => "table",
            Self::TableExtension => "tableextension",
            Self::XmlPort => "xmlport",
        }
    }

    /// Returns true if IDs of this type may be keyed per parent object
    /// (`table_50000`, `enumextension_7`).
    pub fn is_extendable(&self) -> bool {
        EXTENDABLE_OBJECT_TYPES.contains(self)
    }

    /// Returns true if this is an `*extension` object type.
    pub fn is_extension(&self) -> bool {
        self.as_str().ends_with("extension")
    }
}

impl fmt::Display for ALObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ALObjectType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|object_type| object_type.as_str() == s)
            .ok_or_else(|| TypeError::UnknownObjectType {
                value: s.to_string(),
            })
    }
}

/// Part of a request that an expectation can target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RequestSection {
    /// JSON request body
    #[default]
    Body,
    /// URL query string parameters
    Query,
    /// Route parameters
    Params,
}

impl RequestSection {
    /// Every section, in the order they are reported.
    pub const ALL: [RequestSection; 3] = [Self::Body, Self::Query, Self::Params];

    /// Section name as used in expectations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Query => "query",
            Self::Params => "params",
        }
    }
}

impl fmt::Display for RequestSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestSection {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| TypeError::UnknownSection {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_keywords_roundtrip() {
        for object_type in ALObjectType::ALL {
            let parsed: ALObjectType = object_type.as_str().parse().unwrap();
            assert_eq!(parsed, object_type);
            assert_eq!(object_type.to_string(), object_type.as_str());
        }
    }

    #[test]
    fn test_object_type_rejects_typos_and_case() {
        assert!("unitcode".parse::<ALObjectType>().is_err());
        assert!("record".parse::<ALObjectType>().is_err());
        assert!("Codeunit".parse::<ALObjectType>().is_err());
        assert!("".parse::<ALObjectType>().is_err());
    }

    #[test]
    fn test_extendable_types() {
        assert!(ALObjectType::Table.is_extendable());
        assert!(ALObjectType::TableExtension.is_extendable());
        assert!(ALObjectType::Enum.is_extendable());
        assert!(ALObjectType::EnumExtension.is_extendable());
        assert!(!ALObjectType::Codeunit.is_extendable());
        assert!(!ALObjectType::PageExtension.is_extendable());
    }

    #[test]
    fn test_extension_types() {
        assert!(ALObjectType::TableExtension.is_extension());
        assert!(ALObjectType::PermissionSetExtension.is_extension());
        assert!(!ALObjectType::Table.is_extension());
    }

    #[test]
    fn test_object_type_serde_matches_keyword() {
        for object_type in ALObjectType::ALL {
            let json = serde_json::to_string(&object_type).unwrap();
            assert_eq!(json, format!("\"{}\"", object_type.as_str()));
        }
    }

    #[test]
    fn test_request_section_parse() {
        assert_eq!("body".parse::<RequestSection>().unwrap(), RequestSection::Body);
        assert_eq!("query".parse::<RequestSection>().unwrap(), RequestSection::Query);
        assert_eq!("params".parse::<RequestSection>().unwrap(), RequestSection::Params);
        assert!("headers".parse::<RequestSection>().is_err());
    }
}
