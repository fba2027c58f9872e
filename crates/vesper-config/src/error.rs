//! Error types for configuration loading and validation.

use thiserror::Error;

/// Errors returned while loading or validating configuration.
///
/// Any of these is fatal at startup: the process refuses to run in a
/// silently-broken state rather than degrade.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    /// A specific field failed validation.
    #[error("invalid config at {path}: {message}")]
    InvalidField {
        /// Field path that failed.
        path: String,
        /// Validation message.
        message: String,
    },
}
