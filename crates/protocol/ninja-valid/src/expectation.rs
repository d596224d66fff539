//! Compiled field expectations.
//!
//! An expectation says "field `f` of section `s` has type `T`". Type names
//! are parsed and resolved against the registry when the expectation is
//! declared, so a typo in a type name is reported before any request is
//! seen.

use ninja_types::RequestSection;

use crate::error::ValidationResult;
use crate::registry::{ResolvedType, TypeRegistry};
use crate::type_name::TypeName;

/// One field's declared type, resolved against a registry.
#[derive(Debug, Clone)]
pub struct FieldExpectation {
    /// Section the field lives in
    pub section: RequestSection,
    /// Field name within the section
    pub field: String,
    /// Declared type
    pub type_name: TypeName,
    /// Predicates for the declared type
    pub resolved: ResolvedType,
}

impl FieldExpectation {
    /// Parse and resolve a single field expectation.
    pub fn compile(
        registry: &TypeRegistry,
        section: RequestSection,
        field: impl Into<String>,
        type_name: &str,
    ) -> ValidationResult<Self> {
        let type_name: TypeName = type_name.parse()?;
        let resolved = registry.resolve(&type_name)?;
        Ok(Self {
            section,
            field: field.into(),
            type_name,
            resolved,
        })
    }

    /// Full path of the field (`body.range`).
    pub fn path(&self) -> String {
        format!("{}.{}", self.section, self.field)
    }

    /// Returns true if this expectation targets the given section and field.
    pub fn targets(&self, section: RequestSection, field: &str) -> bool {
        self.section == section && self.field == field
    }
}

/// Ordered set of field expectations.
///
/// Declaring the same section and field again replaces the earlier type but
/// keeps its position, so reports stay in first-declaration order.
#[derive(Debug, Clone, Default)]
pub struct Expectations {
    entries: Vec<FieldExpectation>,
}

impl Expectations {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expectation. Returns the one it replaced, if any.
    pub fn insert(&mut self, expectation: FieldExpectation) -> Option<FieldExpectation> {
        match self
            .entries
            .iter_mut()
            .find(|e| e.targets(expectation.section, &expectation.field))
        {
            Some(existing) => Some(std::mem::replace(existing, expectation)),
            None => {
                self.entries.push(expectation);
                None
            }
        }
    }

    /// Look up the expectation for a field.
    pub fn get(&self, section: RequestSection, field: &str) -> Option<&FieldExpectation> {
        self.entries.iter().find(|e| e.targets(section, field))
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldExpectation> {
        self.entries.iter()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Expectations {
    type Item = &'a FieldExpectation;
    type IntoIter = std::slice::Iter<'a, FieldExpectation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
