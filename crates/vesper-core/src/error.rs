//! Error types for the session core crate.

use thiserror::Error;

/// Errors returned by session lifecycle operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Live session engine failure.
    #[error("engine error: {0}")]
    Engine(String),
    /// Memory gateway failure surfaced during startup.
    #[error("memory error: {0}")]
    Memory(String),
    /// Controller was driven through an invalid state transition.
    #[error("invalid session state: {0}")]
    InvalidState(String),
}
