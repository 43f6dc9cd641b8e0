//! `[general]` settings shared by every command.

use serde::{Deserialize, Serialize};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// `[general]` section.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// `tracing` filter directive used when `RIA_LOG`, `--quiet` and
    /// `--verbose` are all absent, e.g. `"info"` or `"ria_analyzer=debug"`.
    pub log_level: String,
}

impl GeneralConfig {
    /// The configured filter, or `warn` when the value is blank.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        let level = self.log_level.trim();
        if level.is_empty() { DEFAULT_LOG_LEVEL } else { level }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
