#![allow(clippy::module_name_repetitions)]

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod dashboard;
mod logging;
mod output;
mod progress;
mod status;
mod tui;
mod ui;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("mindguard error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    let command = cli.command.unwrap_or_default();
    let interactive = matches!(command, cli::Commands::Run);

    // The interactive app owns the terminal and may only log to a file.
    if !interactive {
        logging::init_stderr(flags.quiet, flags.verbose)?;
    }
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config()?;
    let _log_guard = if interactive {
        logging::init_file(&config.general, flags.quiet, flags.verbose)?
    } else {
        None
    };
    bootstrap::warn_unconfigured(&config);

    commands::dispatch::dispatch(command, &config, &flags).await
}
