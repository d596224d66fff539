//! Ninja CLI binary entry point.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ninja_cli::{
    cli::{Cli, Commands},
    commands::{self, CheckOptions},
    config::{default_config_path, CliConfig},
    error::{CliError, CliResult},
    output::{ErrorOutput, OutputFormat},
};

fn main() {
    let cli = Cli::parse();
    let format: OutputFormat = cli.format.into();

    // Initialize logging based on --verbose flag or RUST_LOG env var
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if cli.verbose || has_rust_log {
        let mut filter = EnvFilter::from_default_env();
        if cli.verbose {
            if let Ok(directive) = "ninja=debug".parse() {
                filter = filter.add_directive(directive);
            }
        }
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    if let Err(e) = run(cli, format) {
        print_error(&e, format);
        std::process::exit(e.exit_code());
    }
}

/// Print a user-friendly error message with error code and recovery hint.
fn print_error(e: &CliError, format: OutputFormat) {
    if format == OutputFormat::Json {
        println!("{}", ErrorOutput::from(e).render_json());
        return;
    }

    let code = e.error_code();

    // Error line with code
    eprintln!(
        "{} [{}]: {}",
        "Error".red().bold(),
        code.to_string().yellow(),
        e
    );

    // Suggestion if available
    if let Some(suggestion) = code.suggestion() {
        eprintln!("{}: {}", "Hint".cyan(), suggestion);
    }
}

fn run(cli: Cli, format: OutputFormat) -> CliResult<()> {
    // Load configuration
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = CliConfig::load(&config_path)?;

    if !config.display.color {
        colored::control::set_override(false);
    }

    // Dispatch command
    let output = match cli.command {
        Commands::Check {
            body,
            schema,
            expect,
            method,
            query,
            param,
            collect,
        } => commands::check(
            config,
            format,
            CheckOptions {
                body,
                schema,
                expect,
                method,
                query,
                params: param,
                collect,
            },
        )?,

        Commands::Types => commands::types(format)?,

        Commands::Parse { type_name } => commands::parse(format, &type_name)?,

        Commands::Completions { shell } => commands::completions(shell)?,
    };

    // Print output
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
