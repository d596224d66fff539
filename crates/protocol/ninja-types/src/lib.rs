//! Domain types for Object ID Ninja request validation.
//!
//! This crate provides the data types the validation rules operate on.
//! It contains no validation logic beyond parsing domain values from
//! their string forms.
//!
//! # Module Organization
//!
//! - [`enums`] - `ALObjectType` and `RequestSection`
//! - [`constants`] - JSON key names and extension-key rules
//! - [`error`] - Error codes and the parse error type
//! - [`object_ids`] - `ObjectIdKey`, `ObjectIds`, `AppObjectIds`, `Range`
//! - [`request`] - The request model validated by `ninja-valid`
//!
//! # Example
//!
//! ```
//! use ninja_types::{ALObjectType, ObjectIdKey};
//!
//! let key: ObjectIdKey = "tableextension_50100".parse().unwrap();
//! assert_eq!(key.object_type, ALObjectType::TableExtension);
//! assert!(key.is_extended());
//!
//! assert!("codeunit_1".parse::<ObjectIdKey>().is_err());
//! assert!("table_0".parse::<ObjectIdKey>().is_err());
//! ```
//!
//! # Type Conventions
//!
//! - Derive `Debug`, `Clone`, `PartialEq`, `Eq` where appropriate
//! - Derive `Copy` for small types (enums, keys)
//! - String forms round-trip through `FromStr` and `Display`
//! - Serde uses the exact JSON key names the API sends (`appId`)

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod enums;
pub mod error;
pub mod object_ids;
pub mod request;

// Enums
pub use enums::{ALObjectType, RequestSection};

// Constants
pub use constants::*;

// Error types
pub use error::{ErrorCode, TypeError, TypeResult};

// Object ID types
pub use object_ids::{AppObjectIds, ObjectIdKey, ObjectIds, Range};

// Request
pub use request::Request;
