//! Gateway error types.

use thiserror::Error;

/// Everything that can go wrong between submitting an assessment and
/// holding a decoded report.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No API key was supplied.
    #[error("Gemini API key is not configured (set GEMINI_API_KEY or gemini.api_key)")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request exceeded `gemini.timeout_secs`.
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The reply carried no candidate text.
    #[error("model returned no content{}", reason.as_deref().map(|r| format!(" ({r})")).unwrap_or_default())]
    EmptyReply { reason: Option<String> },

    /// The reply (or its envelope) was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The reply was JSON but did not match the report contract.
    #[error("reply does not match the report shape: {}", errors.join("; "))]
    Shape { errors: Vec<String> },
}

impl GatewayError {
    /// Classify a reqwest failure, surfacing timeouts separately.
    pub(crate) fn from_transport(error: reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            Self::Timeout { secs: timeout_secs }
        } else {
            Self::Http(error)
        }
    }

    /// Whether resubmitting the same request could plausibly succeed.
    ///
    /// External-call failures are transient; shape failures and missing
    /// configuration are not.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout { .. } | Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::NotConfigured
            | Self::EmptyReply { .. }
            | Self::Parse(_)
            | Self::Shape { .. } => false,
        }
    }
}
