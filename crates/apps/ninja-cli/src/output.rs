//! Output formatting for CLI.

use colored::Colorize;
use serde::Serialize;

use crate::error::CliError;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// Output for a request that passed validation.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub valid: bool,
    pub method: String,
    pub fields: usize,
    pub mode: String,
}

impl Render for CheckOutput {
    fn render_human(&self) -> String {
        format!(
            "{} {} request, {} field{} checked ({})",
            "Valid:".green().bold(),
            self.method,
            self.fields,
            if self.fields == 1 { "" } else { "s" },
            self.mode
        )
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the types command.
#[derive(Debug, Serialize)]
pub struct TypesOutput {
    pub types: Vec<TypeInfo>,
}

/// A registered type.
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    pub name: String,
    pub description: Option<String>,
}

impl Render for TypesOutput {
    fn render_human(&self) -> String {
        let width = self.types.iter().map(|t| t.name.len()).max().unwrap_or(0);
        let mut lines = vec![format!("{}", "Registered types:".bold())];
        for info in &self.types {
            let name = format!("{:width$}", info.name, width = width);
            match &info.description {
                Some(description) => {
                    lines.push(format!("  {}  {}", name.cyan(), description.dimmed()))
                }
                None => lines.push(format!("  {}", name.cyan())),
            }
        }
        lines.push(String::new());
        lines.push(format!(
            "Append '[]' for arrays and '?' for optional fields, e.g. {}",
            "ALObjectType[]?".cyan()
        ));
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the parse command.
#[derive(Debug, Serialize)]
pub struct ParseOutput {
    pub input: String,
    pub canonical: String,
    pub base: String,
    pub array_depth: usize,
    pub optional: bool,
    pub registered: bool,
}

impl Render for ParseOutput {
    fn render_human(&self) -> String {
        let registered = if self.registered {
            "yes".green()
        } else {
            "no".red()
        };
        [
            format!("{} {}", "Type:".bold(), self.canonical),
            format!("{} {}", "Base:".bold(), self.base),
            format!("{} {}", "Array depth:".bold(), self.array_depth),
            format!("{} {}", "Optional:".bold(), self.optional),
            format!("{} {}", "Registered:".bold(), registered),
        ]
        .join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Machine-readable form of a failed command.
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    pub error: String,
    pub code: String,
    pub http_status: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl From<&CliError> for ErrorOutput {
    fn from(err: &CliError) -> Self {
        let code = err.error_code();
        let errors = match err {
            CliError::Rejected(report) => report.errors().iter().map(|e| e.to_string()).collect(),
            _ => Vec::new(),
        };
        Self {
            error: err.to_string(),
            code: code.to_string(),
            http_status: code.http_status(),
            errors,
        }
    }
}

impl ErrorOutput {
    /// Render as JSON string.
    pub fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
