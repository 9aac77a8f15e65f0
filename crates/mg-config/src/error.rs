//! Errors raised while loading or checking MindGuard settings.

use thiserror::Error;

/// Why a [`MindGuardConfig`](crate::MindGuardConfig) could not be produced
/// or used.
///
/// Loading fails on unreadable TOML or mistyped env overrides. `validate`
/// rejects zero UI timings, and `require` fails when the Gemini key is unset.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `MINDGUARD_*` variable could not be merged or extracted.
    #[error("failed to load MindGuard configuration: {0}")]
    Figment(#[from] figment::Error),

    #[error("[{section}] is not configured; MindGuard needs it for this command")]
    NotConfigured { section: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
