//! Tool error type shared by the registry and providers.

/// Errors returned by tools and external-call providers.
///
/// These never cross the session boundary as raised faults: the registry's
/// dispatch layer converts every variant into a descriptive result string.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Tool name was not found in registry.
    #[error("tool not found: {0}")]
    ToolNotFound(String),
    /// Tool received invalid arguments.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    /// Tool execution failed.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
    /// Outbound call exceeded its timeout budget.
    #[error("timed out: {0}")]
    Timeout(String),
    /// Upstream service answered with a non-success status.
    #[error("upstream returned status {status}")]
    Upstream {
        /// HTTP status code from the upstream service.
        status: u16,
    },
}
