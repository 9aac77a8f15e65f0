//! # mg-config
//!
//! Layered configuration loading for MindGuard using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MINDGUARD_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY`, then `API_KEY`, as aliases for `gemini.api_key`
//! 3. Project-level `.mindguard/config.toml`
//! 4. User-level `~/.config/mindguard/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MINDGUARD_GEMINI__API_KEY` -> `gemini.api_key`,
//! `MINDGUARD_UI__TICK_RATE_MS` -> `ui.tick_rate_ms`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use mg_config::MindGuardConfig;
//!
//! let config = MindGuardConfig::load_with_dotenv().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("Model: {}", config.gemini.model);
//! }
//! ```

mod error;
mod gemini;
mod general;
mod ui;

pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;
pub use ui::UiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for structured environment overrides.
pub const ENV_PREFIX: &str = "MINDGUARD_";

/// Bare variables accepted for `gemini.api_key`, lowest priority first.
pub const API_KEY_ALIASES: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MindGuardConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MindGuardConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary provider chain.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mindguard/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: bare API key aliases
        for alias in API_KEY_ALIASES {
            figment = figment.merge(
                Env::raw()
                    .only(&[alias])
                    .map(|_| "gemini.api_key".into()),
            );
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mindguard").join("config.toml"))
    }

    /// Reject values that would make the UI or the client misbehave.
    ///
    /// A missing API key is not an error here: `config` and `schema` work
    /// without one. Callers that need the key use [`GeminiConfig::require`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms", "must be greater than zero"));
        }
        if self.ui.status_interval_ms == 0 {
            return Err(invalid("ui.status_interval_ms", "must be greater than zero"));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(invalid("gemini.model", "must not be empty"));
        }
        let endpoint = self.gemini.endpoint.as_str();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(invalid("gemini.endpoint", "must be an http(s) URL"));
        }
        Ok(())
    }

    /// A copy safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            gemini: self.gemini.redacted(),
            ..self.clone()
        }
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
