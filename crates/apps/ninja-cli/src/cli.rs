//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Object ID Ninja request validator.
#[derive(Parser, Debug)]
#[command(name = "ninja")]
#[command(author = "Object ID Ninja Contributors")]
#[command(version)]
#[command(about = "Validate Object ID Ninja API requests against declared field types")]
#[command(
    long_about = "Checks request bodies, query strings and route parameters against type-tag expectations such as 'Range', 'ALObjectType[]' or 'PerAppObjectIDs'.\n\nRun 'ninja types' to list the registered types."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "NINJA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // =========================================================================
    // Validation Commands
    // =========================================================================
    /// Validate a request.
    ///
    /// Reads a JSON body and checks it, together with any query and route
    /// parameters, against the declared expectations.
    Check {
        /// Path to the JSON request body ('-' for stdin).
        #[arg(short, long)]
        body: PathBuf,

        /// Path to a TOML expectation file.
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Field expectation, e.g. 'body.range=Range'. Repeatable.
        #[arg(short, long = "expect", value_name = "SECTION.FIELD=TYPE")]
        expect: Vec<String>,

        /// HTTP method of the request.
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Query string parameter, e.g. 'appId=app1'. Repeatable.
        #[arg(short, long = "query", value_name = "NAME=VALUE")]
        query: Vec<String>,

        /// Route parameter, e.g. 'type=table'. Repeatable.
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        param: Vec<String>,

        /// Report every failure instead of stopping at the first.
        #[arg(long)]
        collect: bool,
    },

    // =========================================================================
    // Introspection Commands
    // =========================================================================
    /// List registered types.
    Types,

    /// Show how a type name is parsed.
    Parse {
        /// Type name, e.g. 'ALObjectType[]' or 'ObjectIDs?'.
        type_name: String,
    },

    // =========================================================================
    // Utility Commands
    // =========================================================================
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: CompletionShell,
    },
}

/// Shell argument for completions.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    #[value(name = "powershell")]
    PowerShell,
}
