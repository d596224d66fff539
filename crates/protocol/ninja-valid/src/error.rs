//! Validation error types.
//!
//! `ValidationError` is what callers of the validator see. Predicates
//! report the narrower `Mismatch`, which the validator turns into a
//! `ValidationError::ShapeMismatch` once it knows the field's full path.

use std::fmt;

use ninja_types::{ErrorCode, RequestSection};
use thiserror::Error;

/// Errors that can occur while compiling expectations or validating a request.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    // =========================================================================
    // Schema Errors
    // =========================================================================
    /// Expectation references a type that is not registered
    #[error("unknown type: '{name}'")]
    UnknownType {
        /// The unregistered base name
        name: String,
    },

    /// Expectation contains a type name that cannot be parsed
    #[error("invalid type name '{input}': {reason}")]
    InvalidTypeName {
        /// The rejected type name
        input: String,
        /// Why it was rejected
        reason: String,
    },

    // =========================================================================
    // Request Errors
    // =========================================================================
    /// Value does not have the shape of its declared type
    #[error("{path}: expected {expected}: {reason}")]
    ShapeMismatch {
        /// Location of the offending value (`body.ObjectIDs.table_0`)
        path: String,
        /// Declared type of the field
        expected: String,
        /// What was wrong with the value
        reason: String,
    },

    /// Declared field is absent from the request
    #[error("{section}.{field}: missing required field")]
    MissingField {
        /// Section the field was expected in
        section: RequestSection,
        /// Field name
        field: String,
    },

    // =========================================================================
    // Generic Errors
    // =========================================================================
    /// Internal validation error
    #[error("internal validation error: {0}")]
    Internal(String),
}

impl ValidationError {
    /// Get the corresponding error code for this validation error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnknownType { .. } => ErrorCode::UnknownType,
            Self::InvalidTypeName { .. } => ErrorCode::InvalidTypeName,
            Self::ShapeMismatch { .. } => ErrorCode::InvalidShape,
            Self::MissingField { .. } => ErrorCode::MissingField,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Create an invalid type name error.
    pub fn invalid_type_name(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTypeName {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Every failure found in one request, in declaration order.
///
/// Never empty: a report only exists when validation failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Build a report from collected errors. Returns `None` if there are none.
    pub fn from_errors(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// All collected errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The first error encountered.
    pub fn first(&self) -> &ValidationError {
        // `from_errors` and `From<ValidationError>` never build an empty report.
        &self.errors[0]
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the report and return its errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Error code of the first error.
    pub fn error_code(&self) -> ErrorCode {
        self.first().error_code()
    }
}

impl From<ValidationError> for ValidationReport {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.len() == 1 {
            return write!(f, "{}", self.errors[0]);
        }
        write!(f, "{} validation errors", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// A predicate failure, located relative to the value it was handed.
///
/// `location` is built inside out as the failure propagates up through
/// arrays and objects, e.g. `[1].ids.record`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Path from the checked value to the offending value
    pub location: String,
    /// What was wrong
    pub reason: String,
}

impl Mismatch {
    /// Create a mismatch at the checked value itself.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            location: String::new(),
            reason: reason.into(),
        }
    }

    /// Locate this mismatch under an object key.
    pub fn at_key(mut self, key: &str) -> Self {
        self.location = format!(".{}{}", key, self.location);
        self
    }

    /// Locate this mismatch under an array index.
    pub fn at_index(mut self, index: usize) -> Self {
        self.location = format!("[{}]{}", index, self.location);
        self
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "at {}: {}", self.location, self.reason)
        }
    }
}

/// Result type returned by type predicates.
pub type PredicateResult = std::result::Result<(), Mismatch>;
