use anyhow::Context;
use mg_schema::SchemaRegistry;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `mindguard schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    println!("{}", render(&registry, args.name.as_deref(), flags.format)?);
    Ok(())
}

fn render(
    registry: &SchemaRegistry,
    name: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let Some(name) = name else {
        let names = registry.list();
        return match format {
            OutputFormat::Text => Ok(names.join("\n")),
            OutputFormat::Json | OutputFormat::Raw => output::render(&names, format),
        };
    };

    let schema = registry.get(name).with_context(|| {
        format!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        )
    })?;
    output::render(schema, format)
}
