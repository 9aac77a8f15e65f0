use std::sync::Arc;

use anyhow::Context;
use mg_config::MindGuardConfig;
use mg_gateway::{AnalysisGateway, GeminiClient};

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<MindGuardConfig> {
    MindGuardConfig::load_with_dotenv().context("failed to load MindGuard configuration")
}

/// Build the production gateway. Fails early when no API key is configured.
pub fn build_gateway(config: &MindGuardConfig) -> anyhow::Result<Arc<dyn AnalysisGateway>> {
    let gemini = config
        .gemini
        .require()
        .context("set GEMINI_API_KEY or MINDGUARD_GEMINI__API_KEY")?;
    let client = GeminiClient::new(gemini).context("failed to build Gemini client")?;
    tracing::debug!(model = client.model(), "gemini client ready");
    Ok(Arc::new(client))
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &MindGuardConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &MindGuardConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured()
        && env_keys
            .iter()
            .any(|key| key.starts_with("MINDGUARD_GEMINI") && !key.starts_with("MINDGUARD_GEMINI__"))
    {
        warnings.push(
            "Gemini API key is missing while MINDGUARD_GEMINI* env vars exist. Use double underscores (example: MINDGUARD_GEMINI__API_KEY)."
                .to_string(),
        );
    }

    if env_keys
        .iter()
        .any(|key| key.starts_with("MINDGUARD_UI_") && !key.starts_with("MINDGUARD_UI__"))
    {
        warnings.push(
            "MINDGUARD_UI* env vars are ignored without double underscores (example: MINDGUARD_UI__TICK_RATE_MS)."
                .to_string(),
        );
    }

    warnings
}
