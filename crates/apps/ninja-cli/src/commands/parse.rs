//! Show how a type name is parsed.

use ninja_valid::{TypeName, TypeRegistry};

use crate::error::CliResult;
use crate::output::{OutputFormat, ParseOutput, Render};

/// Execute the parse command.
pub fn parse(format: OutputFormat, input: &str) -> CliResult<String> {
    let type_name: TypeName = input.parse()?;
    let registry = TypeRegistry::with_builtins();

    let output = ParseOutput {
        input: input.to_string(),
        canonical: type_name.to_string(),
        base: type_name.base_name().to_string(),
        array_depth: type_name.array_depth(),
        optional: type_name.is_optional(),
        registered: registry.contains(type_name.base_name()),
    };

    Ok(output.render(format))
}
