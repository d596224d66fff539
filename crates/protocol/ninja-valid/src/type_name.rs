//! Type names used in expectations.
//!
//! A type name is a registered base name with optional wrappers:
//!
//! - `Range` - a registered type
//! - `ALObjectType[]` - an array whose every element is an `ALObjectType`
//! - `ALObjectType[][]` - arrays nest
//! - `ObjectIDs?` - the field may be absent; `?` is only allowed last
//!
//! Names are parsed once when an expectation is declared.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Array suffix of a type name.
const ARRAY_SUFFIX: &str = "[]";

/// Optional marker of a type name.
const OPTIONAL_SUFFIX: char = '?';

/// A parsed type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// A registered type, by base name
    Named(String),
    /// An array of the inner type
    ArrayOf(Box<TypeName>),
    /// The inner type, or an absent field
    Optional(Box<TypeName>),
}

impl TypeName {
    /// Name of a registered type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wrap this type in an array.
    pub fn array_of(self) -> Self {
        Self::ArrayOf(Box::new(self))
    }

    /// Wrap this type as optional.
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// The registered base name this type refers to.
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::ArrayOf(inner) | Self::Optional(inner) => inner.base_name(),
        }
    }

    /// Returns true if the field may be absent.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Number of array wrappers around the base type.
    pub fn array_depth(&self) -> usize {
        match self {
            Self::Named(_) => 0,
            Self::ArrayOf(inner) => 1 + inner.array_depth(),
            Self::Optional(inner) => inner.array_depth(),
        }
    }
}

fn is_valid_base_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl FromStr for TypeName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::invalid_type_name(s, "empty type name"));
        }

        let (body, optional) = match s.strip_suffix(OPTIONAL_SUFFIX) {
            Some(body) => (body, true),
            None => (s, false),
        };
        if body.contains(OPTIONAL_SUFFIX) {
            return Err(ValidationError::invalid_type_name(
                s,
                "'?' may only appear once, at the end",
            ));
        }

        let mut base = body;
        let mut depth = 0usize;
        while let Some(inner) = base.strip_suffix(ARRAY_SUFFIX) {
            base = inner;
            depth += 1;
        }

        if base.is_empty() {
            return Err(ValidationError::invalid_type_name(s, "missing base name"));
        }
        if base.contains('[') || base.contains(']') {
            return Err(ValidationError::invalid_type_name(
                s,
                "brackets must come in '[]' pairs after the base name",
            ));
        }
        if !is_valid_base_name(base) {
            return Err(ValidationError::invalid_type_name(
                s,
                "base name must be an identifier (letters, digits, '_')",
            ));
        }

        let mut type_name = Self::Named(base.to_string());
        for _ in 0..depth {
            type_name = type_name.array_of();
        }
        if optional {
            type_name = type_name.optional();
        }
        Ok(type_name)
    }
}

impl TryFrom<&str> for TypeName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{}", name),
            Self::ArrayOf(inner) => write!(f, "{}{}", inner, ARRAY_SUFFIX),
            Self::Optional(inner) => write!(f, "{}{}", inner, OPTIONAL_SUFFIX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<TypeName, ValidationError> {
        s.parse()
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse("Range").unwrap(), TypeName::named("Range"));
    }

    #[test]
    fn test_parse_array() {
        let parsed = parse("ALObjectType[]").unwrap();
        assert_eq!(parsed, TypeName::named("ALObjectType").array_of());
        assert_eq!(parsed.base_name(), "ALObjectType");
        assert_eq!(parsed.array_depth(), 1);
        assert!(!parsed.is_optional());
    }

    #[test]
    fn test_parse_nested_optional_array() {
        let parsed = parse("integer[][]?").unwrap();
        assert_eq!(
            parsed,
            TypeName::named("integer").array_of().array_of().optional()
        );
        assert_eq!(parsed.array_depth(), 2);
        assert!(parsed.is_optional());
    }

    #[test]
    fn test_display_roundtrip() {
        for input in ["Range", "ALObjectType[]", "ObjectIDs?", "integer[][]?"] {
            assert_eq!(parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "", "[]", "?", "Range??", "Range?[]", "Range[", "Range]", "Ran[]ge", "Range []",
            " Range", "1Range", "Range-Type",
        ] {
            let err = parse(input).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidTypeName { .. }),
                "expected InvalidTypeName for {:?}, got {:?}",
                input,
                err
            );
        }
    }
}
