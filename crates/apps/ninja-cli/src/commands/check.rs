//! Validate a request.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ninja_types::Request;
use ninja_valid::{RequestValidator, TypeRegistry, ValidationMode, Validator, ValidatorConfig};
use serde_json::Value;
use tracing::debug;

use crate::config::{parse_expect_arg, parse_pair_arg, CliConfig, ExpectationFile};
use crate::error::{CliError, CliResult};
use crate::output::{CheckOutput, OutputFormat, Render};

/// Arguments of the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// JSON body file, or `-` for stdin
    pub body: PathBuf,
    /// Expectation file overriding the configured one
    pub schema: Option<PathBuf>,
    /// `section.field=Type` expectations
    pub expect: Vec<String>,
    /// HTTP method
    pub method: String,
    /// `name=value` query parameters
    pub query: Vec<String>,
    /// `name=value` route parameters
    pub params: Vec<String>,
    /// Force collect mode
    pub collect: bool,
}

/// Execute the check command.
pub fn check(config: CliConfig, format: OutputFormat, options: CheckOptions) -> CliResult<String> {
    let mode = if options.collect {
        ValidationMode::Collect
    } else {
        config.validation.mode
    };
    let registry = Arc::new(TypeRegistry::with_builtins());
    let mut validator =
        RequestValidator::with_config(registry, ValidatorConfig::new().with_mode(mode));

    let schema = match options.schema {
        Some(path) => Some(path),
        None => config.validation.schema_path()?,
    };
    if let Some(path) = schema {
        let file = ExpectationFile::load(&path)?;
        debug!(path = %path.display(), fields = file.field_count(), "loaded expectation file");
        file.apply(&mut validator)?;
    }

    for arg in &options.expect {
        let (section, field, type_name) = parse_expect_arg(arg)?;
        validator.expect(section, [(field, type_name)])?;
    }

    if validator.expectations().is_empty() {
        return Err(CliError::user(
            "No expectations declared. Pass --schema <file> or --expect section.field=Type.",
        ));
    }

    let mut request = Request::new(&options.method, read_body(&options.body)?);
    for arg in &options.query {
        let (name, value) = parse_pair_arg(arg)?;
        request = request.with_query(name, value);
    }
    for arg in &options.params {
        let (name, value) = parse_pair_arg(arg)?;
        request = request.with_param(name, value);
    }

    validator.check(&request)?;

    let output = CheckOutput {
        valid: true,
        method: request.method,
        fields: validator.expectations().len(),
        mode: match mode {
            ValidationMode::FailFast => "fail_fast".to_string(),
            ValidationMode::Collect => "collect".to_string(),
        },
    };

    Ok(output.render(format))
}

/// Read and parse the request body.
fn read_body(path: &Path) -> CliResult<Value> {
    let contents = if path == Path::new("-") {
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)?;
        contents
    } else {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        std::fs::read_to_string(path)?
    };

    if contents.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&contents)?)
}
