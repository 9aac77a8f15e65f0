use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mindguard` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mindguard",
    version,
    about = "MindGuard - daily stress check-in with AI-generated coping support"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format for headless commands: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no spinner)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["mindguard"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Commands::Run));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["mindguard", "--format", "json", "--verbose", "config"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Config)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["mindguard", "analyze", "-i", "a.json", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.global_flags().quiet);
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.input, Path::new("a.json"));
        assert!(!args.reads_stdin());
    }

    #[test]
    fn analyze_accepts_stdin_dash() {
        let cli = Cli::try_parse_from(["mindguard", "analyze", "--input", "-"])
            .expect("cli should parse");
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert!(args.reads_stdin());
    }

    #[test]
    fn analyze_requires_input() {
        assert!(Cli::try_parse_from(["mindguard", "analyze"]).is_err());
    }

    #[test]
    fn schema_name_is_optional() {
        let cli = Cli::try_parse_from(["mindguard", "schema"]).expect("cli should parse");
        assert!(matches!(cli.command, Some(Commands::Schema(ref args)) if args.name.is_none()));

        let cli = Cli::try_parse_from(["mindguard", "schema", "category"]).expect("cli should parse");
        assert!(
            matches!(cli.command, Some(Commands::Schema(ref args)) if args.name.as_deref() == Some("category"))
        );
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["mindguard", "--format", "table", "config"]);
        assert!(parsed.is_err());
    }
}
