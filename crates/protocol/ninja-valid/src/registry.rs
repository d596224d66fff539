//! Type registry.
//!
//! The registry maps base type names to predicates. It is built once,
//! shared behind an `Arc`, and consulted when expectations are declared:
//! a `TypeName` resolves to a `ResolvedType` that holds its predicates
//! directly, so validation never looks names up again.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::{Mismatch, PredicateResult, ValidationError, ValidationResult};
use crate::primitive::json_kind;
use crate::type_name::TypeName;

/// A structural check over a JSON value.
///
/// Implemented for any `Fn(&Value) -> PredicateResult`, so plain functions
/// can be registered directly.
pub trait TypePredicate: Send + Sync {
    /// Check the value, describing the first problem found.
    fn check(&self, value: &Value) -> PredicateResult;
}

impl<F> TypePredicate for F
where
    F: Fn(&Value) -> PredicateResult + Send + Sync,
{
    fn check(&self, value: &Value) -> PredicateResult {
        self(value)
    }
}

/// Adapter for yes/no predicates that cannot explain a failure.
struct BoolPredicate<F> {
    name: String,
    predicate: F,
}

impl<F> TypePredicate for BoolPredicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn check(&self, value: &Value) -> PredicateResult {
        if (self.predicate)(value) {
            Ok(())
        } else {
            Err(Mismatch::new(format!(
                "{} value is not a valid {}",
                json_kind(value),
                self.name
            )))
        }
    }
}

/// A registered type.
#[derive(Clone)]
pub struct TypeEntry {
    predicate: Arc<dyn TypePredicate>,
    description: Option<String>,
}

impl TypeEntry {
    /// Human-readable description, if one was registered.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Check a value against this type.
    pub fn check(&self, value: &Value) -> PredicateResult {
        self.predicate.check(value)
    }
}

impl fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeEntry")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Registry of named type predicates.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeEntry>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in type.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::inject::inject_validators(&mut registry);
        registry
    }

    /// Register a predicate under a base name, replacing any previous one.
    pub fn register<P>(&mut self, name: impl Into<String>, predicate: P) -> &mut Self
    where
        P: TypePredicate + 'static,
    {
        self.insert(name.into(), Arc::new(predicate), None)
    }

    /// Register a predicate together with a description for listings.
    pub fn register_described<P>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        predicate: P,
    ) -> &mut Self
    where
        P: TypePredicate + 'static,
    {
        self.insert(name.into(), Arc::new(predicate), Some(description.into()))
    }

    /// Register a yes/no predicate.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        let predicate = BoolPredicate {
            name: name.clone(),
            predicate,
        };
        self.insert(name, Arc::new(predicate), None)
    }

    fn insert(
        &mut self,
        name: String,
        predicate: Arc<dyn TypePredicate>,
        description: Option<String>,
    ) -> &mut Self {
        let replaced = self
            .types
            .insert(
                name.clone(),
                TypeEntry {
                    predicate,
                    description,
                },
            )
            .is_some();
        debug!(type_name = %name, replaced, "registered type");
        self
    }

    /// Returns true if a base name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Look up a registered base name.
    pub fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.types.get(name)
    }

    /// Registered base names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Registered entries, sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TypeEntry)> {
        self.types.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of registered base names.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve a type name to its predicates.
    ///
    /// Fails with `UnknownType` if the base name is not registered.
    pub fn resolve(&self, type_name: &TypeName) -> ValidationResult<ResolvedType> {
        match type_name {
            TypeName::Named(name) => {
                let entry = self
                    .types
                    .get(name)
                    .ok_or_else(|| ValidationError::UnknownType { name: name.clone() })?;
                Ok(ResolvedType::Named {
                    name: name.clone(),
                    predicate: Arc::clone(&entry.predicate),
                })
            }
            TypeName::ArrayOf(inner) => Ok(ResolvedType::ArrayOf(Box::new(self.resolve(inner)?))),
            TypeName::Optional(inner) => {
                Ok(ResolvedType::Optional(Box::new(self.resolve(inner)?)))
            }
        }
    }

    /// Parse and resolve a type name in one step.
    pub fn resolve_str(&self, type_name: &str) -> ValidationResult<ResolvedType> {
        let type_name: TypeName = type_name.parse()?;
        self.resolve(&type_name)
    }
}

/// A type name bound to its registered predicates.
#[derive(Clone)]
pub enum ResolvedType {
    /// A registered type
    Named {
        /// Base name, for messages
        name: String,
        /// The registered predicate
        predicate: Arc<dyn TypePredicate>,
    },
    /// Array whose every element satisfies the inner type
    ArrayOf(Box<ResolvedType>),
    /// The inner type, or an absent field
    Optional(Box<ResolvedType>),
}

impl ResolvedType {
    /// Returns true if the field may be absent.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Check a present value.
    ///
    /// An empty array satisfies any array type.
    pub fn check(&self, value: &Value) -> PredicateResult {
        match self {
            Self::Named { predicate, .. } => predicate.check(value),
            Self::ArrayOf(inner) => {
                let items = value.as_array().ok_or_else(|| {
                    Mismatch::new(format!("expected an array, got {}", json_kind(value)))
                })?;
                items.iter().enumerate().try_for_each(|(index, item)| {
                    inner.check(item).map_err(|m| m.at_index(index))
                })
            }
            Self::Optional(inner) => inner.check(value),
        }
    }
}

impl fmt::Debug for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, .. } => f.debug_tuple("Named").field(name).finish(),
            Self::ArrayOf(inner) => f.debug_tuple("ArrayOf").field(inner).finish(),
            Self::Optional(inner) => f.debug_tuple("Optional").field(inner).finish(),
        }
    }
}
