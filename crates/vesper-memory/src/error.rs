//! Error types for memory store operations.

/// Errors returned by memory service implementations.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// Transport-level HTTP error, including timeouts.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Store answered with a non-success status.
    #[error("memory store returned status {0}")]
    Status(u16),
    /// Response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
