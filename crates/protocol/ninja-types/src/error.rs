//! Error types for the request model.
//!
//! This module defines the error codes reported to API callers and the
//! error type returned when parsing domain values from strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::ALObjectType;

/// Error codes reported to API callers.
///
/// Request errors are the caller's fault and map to HTTP 400. Schema
/// errors mean the endpoint itself declared something the registry does
/// not know and map to HTTP 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
#[non_exhaustive]
pub enum ErrorCode {
    // =========================================================================
    // Request Errors (0x0100 - 0x01FF)
    // =========================================================================
    /// A declared field is absent from the request
    MissingField = 0x0100,
    /// A field does not have the shape of its declared type
    InvalidShape = 0x0101,
    /// A section name is not recognized
    UnknownSection = 0x0102,

    // =========================================================================
    // Schema Errors (0x0200 - 0x02FF)
    // =========================================================================
    /// An expectation names a type that is not registered
    UnknownType = 0x0200,
    /// An expectation contains a malformed type name
    InvalidTypeName = 0x0201,

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Internal error
    InternalError = 0xFFFF,
}

impl ErrorCode {
    /// Returns true if this is a request error (0x0100-0x01FF)
    pub fn is_request_error(&self) -> bool {
        let code = *self as u16;
        (0x0100..=0x01FF).contains(&code)
    }

    /// Returns true if this is a schema error (0x0200-0x02FF)
    pub fn is_schema_error(&self) -> bool {
        let code = *self as u16;
        (0x0200..=0x02FF).contains(&code)
    }

    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// HTTP status an endpoint should answer with for this error.
    pub fn http_status(&self) -> u16 {
        if self.is_request_error() {
            400
        } else {
            500
        }
    }

    /// Get a user-friendly suggestion for recovering from this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingField => Some("Add the field to the request or mark its type optional with '?'."),
            Self::InvalidShape => Some("Check the field value against its declared type."),
            Self::UnknownSection => Some("Use one of 'body', 'query' or 'params'."),
            Self::UnknownType => Some("Run 'ninja types' to list the registered types."),
            Self::InvalidTypeName => Some("Type names look like 'Range', 'ALObjectType[]' or 'ObjectIDs?'."),
            Self::InternalError => None,
        }
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        if self.is_request_error() {
            "Request"
        } else if self.is_schema_error() {
            "Schema"
        } else {
            "Internal"
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::MissingField => write!(f, "MISSING_FIELD"),
            ErrorCode::InvalidShape => write!(f, "INVALID_SHAPE"),
            ErrorCode::UnknownSection => write!(f, "UNKNOWN_SECTION"),
            ErrorCode::UnknownType => write!(f, "UNKNOWN_TYPE"),
            ErrorCode::InvalidTypeName => write!(f, "INVALID_TYPE_NAME"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Errors from parsing domain values out of strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeError {
    /// String is not an AL object type keyword
    #[error("unknown AL object type: '{value}'")]
    UnknownObjectType {
        /// The rejected string
        value: String,
    },

    /// Object type does not accept a parent object ID suffix
    #[error("object type '{object_type}' does not accept an extended key")]
    NotExtendable {
        /// The object type that was suffixed
        object_type: ALObjectType,
    },

    /// Parent object ID suffix is not a positive decimal number
    #[error("invalid extended key '{key}': parent object ID must be a positive integer without leading zeros")]
    InvalidExtensionIndex {
        /// The full key
        key: String,
    },

    /// String is not a request section name
    #[error("unknown request section: '{value}'")]
    UnknownSection {
        /// The rejected string
        value: String,
    },
}

impl TypeError {
    /// Get the corresponding error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnknownObjectType { .. }
            | Self::NotExtendable { .. }
            | Self::InvalidExtensionIndex { .. } => ErrorCode::InvalidShape,
            Self::UnknownSection { .. } => ErrorCode::UnknownSection,
        }
    }
}

/// Result type for parsing domain values.
pub type TypeResult<T> = std::result::Result<T, TypeError>;
