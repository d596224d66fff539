//! CLI command implementations.

pub mod check;
pub mod completions;
pub mod parse;
pub mod types;

// Re-export command handlers
pub use check::{check, CheckOptions};
pub use completions::completions;
pub use parse::parse;
pub use types::types;
