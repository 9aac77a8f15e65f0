use mg_config::MindGuardConfig;

use crate::{bootstrap, tui};

/// Handle `mindguard` / `mindguard run`.
pub async fn handle(config: &MindGuardConfig) -> anyhow::Result<()> {
    let gateway = bootstrap::build_gateway(config)?;
    tracing::info!(gateway = gateway.name(), "starting interactive session");
    tui::run(gateway, &config.ui).await
}
