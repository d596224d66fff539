//! CLI error types.

use ninja_types::{ErrorCode, TypeError};
use ninja_valid::{ValidationError, ValidationReport};
use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request failed validation.
    #[error("{0}")]
    Rejected(#[from] ValidationReport),

    /// Expectation could not be compiled.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Domain value could not be parsed.
    #[error("{0}")]
    Types(#[from] TypeError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Request rejected: 1
            Self::Rejected(_) => 1,
            // User errors: 2
            Self::User(_) | Self::Types(_) => 2,
            // Not found: 3
            Self::FileNotFound(_) => 3,
            // Config errors: 4
            Self::Config(_) | Self::Toml(_) => 4,
            // Expectation errors: 5
            Self::Validation(_) => 5,
            // IO errors: 9
            Self::Io(_) => 9,
            // JSON/format errors: 10
            Self::Json(_) => 10,
        }
    }

    /// Get the protocol error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            // Delegated errors
            Self::Rejected(report) => report.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Types(e) => e.error_code(),

            // Malformed input files
            Self::Json(_) => ErrorCode::InvalidShape,

            // Everything else is local to the CLI
            Self::Config(_)
            | Self::Toml(_)
            | Self::Io(_)
            | Self::User(_)
            | Self::FileNotFound(_) => ErrorCode::InternalError,
        }
    }
}
