//! List registered types.

use ninja_valid::TypeRegistry;

use crate::error::CliResult;
use crate::output::{OutputFormat, Render, TypeInfo, TypesOutput};

/// Execute the types command.
pub fn types(format: OutputFormat) -> CliResult<String> {
    let registry = TypeRegistry::with_builtins();

    let output = TypesOutput {
        types: registry
            .entries()
            .map(|(name, entry)| TypeInfo {
                name: name.to_string(),
                description: entry.description().map(str::to_string),
            })
            .collect(),
    };

    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_lists_domain_types() {
        let output = types(OutputFormat::Human).unwrap();
        for name in ["ALObjectType", "ObjectIDs", "PerAppObjectIDs", "Range", "string"] {
            assert!(output.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_types_json() {
        let output = types(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let names: Vec<&str> = value["types"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert!(names.contains(&"PerAppObjectIDs"));
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }
}
