//! Errors raised while loading or checking configuration.

use thiserror::Error;

/// Failure to load or use the `ria` configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read, or a value had the wrong type.
    #[error("failed to read ria configuration: {0}")]
    Figment(#[from] figment::Error),

    #[error("[{section}] is incomplete, set {missing}")]
    NotConfigured {
        section: &'static str,
        /// Comma-separated keys still unset.
        missing: String,
    },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
