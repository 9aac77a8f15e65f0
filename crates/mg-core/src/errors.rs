//! Cross-cutting error types for MindGuard.
//!
//! Domain-specific errors (`ConfigError`, `GatewayError`, ...) live in their
//! respective crates. They converge into `anyhow` in `mg-cli`.

use thiserror::Error;

use crate::session::Screen;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A session transition was attempted from a screen that does not allow it.
    #[error("Invalid state transition: cannot {action} from the {from} screen")]
    InvalidTransition { from: Screen, action: &'static str },

    /// The questionnaire was completed without a selected category.
    #[error("No category selected")]
    MissingCategory,

    /// Data failed validation (empty answers, out-of-range rating, ...).
    #[error("Validation error: {0}")]
    Validation(String),
}
