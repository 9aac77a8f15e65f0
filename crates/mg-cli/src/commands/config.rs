use anyhow::Context;
use mg_config::MindGuardConfig;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `mindguard config`.
pub fn handle(config: &MindGuardConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", render(config, flags.format)?);
    Ok(())
}

/// The effective configuration with the API key masked. `text` prints TOML
/// that can be pasted into `.mindguard/config.toml`.
fn render(config: &MindGuardConfig, format: OutputFormat) -> anyhow::Result<String> {
    let redacted = config.redacted();
    match format {
        OutputFormat::Text => {
            toml::to_string_pretty(&redacted).context("failed to render configuration as TOML")
        }
        OutputFormat::Json | OutputFormat::Raw => output::render(&redacted, format),
    }
}
