//! Command-line request validator for Object ID Ninja.
//!
//! This crate provides the `ninja` binary for checking API requests against
//! type-tag expectations outside the function host. It includes commands
//! for:
//!
//! - **Validation**: Check a JSON body, query and route parameters
//! - **Introspection**: List registered types, explain a type name
//! - **Utilities**: Shell completions
//!
//! # Quick Start
//!
//! ```bash
//! # Check a single field
//! ninja check --body request.json --expect body.range=Range
//!
//! # Check against an expectation file, reporting every failure
//! ninja check --body request.json --schema v2.toml --collect
//!
//! # List registered types
//! ninja types
//! ```
//!
//! # Output Formats
//!
//! All commands support `--format` for output control:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: Machine-readable JSON, including errors
//!
//! # Configuration
//!
//! Configuration is loaded from the platform config directory
//! (`~/.config/ninja/config.toml` on Linux). Override with `--config`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

// Re-export main types
pub use cli::{Cli, Commands, CompletionShell, OutputFormatArg};
pub use config::{CliConfig, ExpectationFile};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
