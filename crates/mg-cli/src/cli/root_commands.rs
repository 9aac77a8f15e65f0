use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level commands. Running without one starts the interactive app.
#[derive(Clone, Debug, Default, Subcommand)]
pub enum Commands {
    /// Start the interactive check-in (default).
    #[default]
    Run,
    /// Analyze a saved assessment without the interactive UI.
    Analyze(AnalyzeArgs),
    /// List or print the JSON Schemas of the analysis contract.
    Schema(SchemaArgs),
    /// Print the effective configuration with secrets redacted.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Assessment request JSON file, or `-` for stdin.
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,
}

impl AnalyzeArgs {
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema to print (`assessment_request`, `analysis_response`, `category`).
    /// Omit to list every registered name.
    pub name: Option<String>,
}
