//! Validator trait and request validator.
//!
//! A `RequestValidator` is bound to a shared `TypeRegistry`, accumulates
//! field expectations with `expect`, and checks requests against them
//! either fail-fast (`validate`) or collecting every failure
//! (`validate_all`).

use std::sync::Arc;

use ninja_types::{Request, RequestSection};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ValidationError, ValidationReport, ValidationResult};
use crate::expectation::{Expectations, FieldExpectation};
use crate::registry::TypeRegistry;

/// Trait for validating requests.
pub trait Validator {
    /// Validate a request, stopping at the first failure.
    fn validate(&self, request: &Request) -> ValidationResult<()>;

    /// Validate a request, collecting every failure in declaration order.
    fn validate_all(&self, request: &Request) -> Result<(), ValidationReport>;

    /// Mode used by `check`.
    fn mode(&self) -> ValidationMode {
        ValidationMode::FailFast
    }

    /// Validate a request in the configured mode.
    fn check(&self, request: &Request) -> Result<(), ValidationReport> {
        match self.mode() {
            ValidationMode::FailFast => self.validate(request).map_err(ValidationReport::from),
            ValidationMode::Collect => self.validate_all(request),
        }
    }
}

/// How `Validator::check` reports failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Stop at the first failing field
    #[default]
    FailFast,
    /// Check every field and report all failures
    Collect,
}

/// Configuration for the request validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Reporting mode for `check`
    pub mode: ValidationMode,
}

impl ValidatorConfig {
    /// Create a new validator config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reporting mode.
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Validates requests against declared field types.
///
/// ```
/// use std::sync::Arc;
/// use ninja_types::{Request, RequestSection};
/// use ninja_valid::{RequestValidator, TypeRegistry, Validator};
/// use serde_json::json;
///
/// let registry = Arc::new(TypeRegistry::with_builtins());
/// let mut validator = RequestValidator::new(registry);
/// validator.expect(RequestSection::Body, [("range", "Range")]).unwrap();
///
/// let ok = Request::new("GET", json!({ "range": { "from": 12, "to": 15 } }));
/// assert!(validator.validate(&ok).is_ok());
///
/// let bad = Request::new("GET", json!({ "range": 3.14 }));
/// assert!(validator.validate(&bad).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RequestValidator {
    registry: Arc<TypeRegistry>,
    config: ValidatorConfig,
    expectations: Expectations,
}

impl RequestValidator {
    /// Create a validator with no expectations.
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self::with_config(registry, ValidatorConfig::default())
    }

    /// Create a validator with configuration.
    pub fn with_config(registry: Arc<TypeRegistry>, config: ValidatorConfig) -> Self {
        Self {
            registry,
            config,
            expectations: Expectations::new(),
        }
    }

    /// Declare the types of fields in one section.
    ///
    /// Every type name is parsed and resolved before any is stored: if one
    /// fails, the validator is left unchanged. Redeclaring a field replaces
    /// its earlier type.
    pub fn expect<I, K, V>(
        &mut self,
        section: RequestSection,
        fields: I,
    ) -> ValidationResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let compiled = fields
            .into_iter()
            .map(|(field, type_name)| {
                FieldExpectation::compile(&self.registry, section, field, type_name.as_ref())
            })
            .collect::<ValidationResult<Vec<_>>>()?;

        for expectation in compiled {
            trace!(
                path = %expectation.path(),
                type_name = %expectation.type_name,
                "declared field"
            );
            if let Some(previous) = self.expectations.insert(expectation) {
                debug!(
                    path = %previous.path(),
                    previous = %previous.type_name,
                    "redeclared field"
                );
            }
        }

        Ok(self)
    }

    /// The registry type names are resolved against.
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Current configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Declared expectations, in declaration order.
    pub fn expectations(&self) -> &Expectations {
        &self.expectations
    }

    fn check_field(
        &self,
        expectation: &FieldExpectation,
        request: &Request,
    ) -> ValidationResult<()> {
        let value = match request.field(expectation.section, &expectation.field) {
            Some(value) => value,
            None if expectation.resolved.is_optional() => {
                trace!(path = %expectation.path(), "optional field absent");
                return Ok(());
            }
            None => {
                return Err(ValidationError::MissingField {
                    section: expectation.section,
                    field: expectation.field.clone(),
                });
            }
        };

        expectation
            .resolved
            .check(&value)
            .map_err(|mismatch| ValidationError::ShapeMismatch {
                path: format!("{}{}", expectation.path(), mismatch.location),
                expected: expectation.type_name.to_string(),
                reason: mismatch.reason,
            })
    }
}

impl Validator for RequestValidator {
    fn validate(&self, request: &Request) -> ValidationResult<()> {
        debug!(
            method = %request.method,
            fields = self.expectations.len(),
            "validating request"
        );
        self.expectations
            .iter()
            .try_for_each(|expectation| self.check_field(expectation, request))
    }

    fn validate_all(&self, request: &Request) -> Result<(), ValidationReport> {
        debug!(
            method = %request.method,
            fields = self.expectations.len(),
            "validating request (collect)"
        );
        let errors: Vec<ValidationError> = self
            .expectations
            .iter()
            .filter_map(|expectation| self.check_field(expectation, request).err())
            .collect();

        match ValidationReport::from_errors(errors) {
            Some(report) => {
                debug!(errors = report.len(), "request failed validation");
                Err(report)
            }
            None => Ok(()),
        }
    }

    fn mode(&self) -> ValidationMode {
        self.config.mode
    }
}
