use mg_config::MindGuardConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &MindGuardConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Run => commands::run::handle(config).await,
        Commands::Analyze(args) => commands::analyze::handle(&args, config, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
        Commands::Config => commands::config::handle(config, flags),
    }
}
