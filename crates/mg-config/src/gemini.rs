//! Gemini API configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::ConfigError;

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Also read from `GEMINI_API_KEY` or `API_KEY`.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL without a trailing path, e.g. `https://generativelanguage.googleapis.com`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout. `0` disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if an API key is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Return `self` if an API key is present.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "gemini".to_string(),
            })
        }
    }

    pub const fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Endpoint with any trailing `/` removed.
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }

    /// A copy safe to print: the key is replaced by a short mask.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            api_key: mask(&self.api_key),
            ..self.clone()
        }
    }
}

fn mask(secret: &str) -> String {
    let count = secret.chars().count();
    match count {
        0 => String::new(),
        1..=8 => "****".to_string(),
        _ => {
            let tail: String = secret.chars().skip(count - 4).collect();
            format!("****{tail}")
        }
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &mask(&self.api_key))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
