//! General application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Log file for the interactive UI, which owns the terminal. Empty disables logging there.
    #[serde(default)]
    pub log_file: String,
}

impl GeneralConfig {
    pub fn log_file_path(&self) -> Option<PathBuf> {
        let trimmed = self.log_file.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
