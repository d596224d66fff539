//! CLI configuration and expectation files.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ninja_types::RequestSection;
use ninja_valid::{RequestValidator, ValidationMode};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax; unset variables are left as-is.
pub fn expand_env_vars(input: &str) -> CliResult<String> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
        .map_err(|e| CliError::config(format!("Invalid expansion pattern: {}", e)))?;
    Ok(re
        .replace_all(input, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string())
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Validation configuration.
    pub validation: ValidationConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load configuration from a file.
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        debug!(path = %path.display(), mode = ?config.validation.mode, "loaded config");
        Ok(config)
    }

    /// Load configuration from the default location.
    pub fn load_default() -> CliResult<Self> {
        let path = default_config_path();
        Self::load(&path)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Save configuration to the default location.
    pub fn save_default(&self) -> CliResult<()> {
        let path = default_config_path();
        self.save(&path)
    }
}

/// Validation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Default reporting mode.
    pub mode: ValidationMode,
    /// Default expectation file. `${VAR}` references are expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl ValidationConfig {
    /// Default expectation file path, with environment variables expanded.
    pub fn schema_path(&self) -> CliResult<Option<PathBuf>> {
        self.schema
            .as_deref()
            .map(|schema| expand_env_vars(schema).map(PathBuf::from))
            .transpose()
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Whether human output is colored.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Get the default config directory.
///
/// Priority:
/// 1. `NINJA_CONFIG_DIR` environment variable (if set)
/// 2. Platform-specific config directory (e.g., `~/.config/ninja` on Linux)
/// 3. Fallback to `~/.ninja`
pub fn default_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NINJA_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("com", "object-id-ninja", "ninja")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".ninja")
        })
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

// =============================================================================
// Expectation Files
// =============================================================================

/// Field expectations loaded from TOML.
///
/// One table per request section, mapping field names to type names:
///
/// ```toml
/// [body]
/// range = "Range"
/// ids = "ObjectIDs?"
///
/// [query]
/// appId = "string"
/// ```
///
/// Fields within a section are declared in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpectationFile {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl ExpectationFile {
    /// Load an expectation file.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse expectations from TOML text.
    pub fn parse(contents: &str) -> CliResult<Self> {
        let file: Self = toml::from_str(contents)?;
        // Reject unknown sections before anything is declared.
        for name in file.sections.keys() {
            name.parse::<RequestSection>()?;
        }
        Ok(file)
    }

    /// Number of declared fields across all sections.
    pub fn field_count(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    /// Declare every expectation on a validator.
    pub fn apply(&self, validator: &mut RequestValidator) -> CliResult<()> {
        for (name, fields) in &self.sections {
            let section: RequestSection = name.parse()?;
            validator.expect(section, fields)?;
        }
        Ok(())
    }
}

/// Parse a `section.field=Type` argument.
pub fn parse_expect_arg(arg: &str) -> CliResult<(RequestSection, String, String)> {
    let (target, type_name) = arg.split_once('=').ok_or_else(|| {
        CliError::user(format!(
            "Invalid expectation '{}'. Use SECTION.FIELD=TYPE, e.g. body.range=Range",
            arg
        ))
    })?;
    let (section, field) = target.split_once('.').ok_or_else(|| {
        CliError::user(format!(
            "Invalid expectation '{}': missing section, e.g. body.{}",
            arg, target
        ))
    })?;
    if field.is_empty() {
        return Err(CliError::user(format!(
            "Invalid expectation '{}': empty field name",
            arg
        )));
    }
    Ok((section.parse()?, field.to_string(), type_name.trim().to_string()))
}

/// Parse a `name=value` argument.
pub fn parse_pair_arg(arg: &str) -> CliResult<(String, String)> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(CliError::user(format!(
            "Invalid parameter '{}'. Use NAME=VALUE",
            arg
        ))),
    }
}
