//! Tool trait definition and metadata spec.

use crate::context::ToolContext;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;
use vesper_protocol::ToolError;

/// Tool metadata spec handed to the session engine for tool selection.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON schema for tool arguments.
    pub args_schema: Value,
}

/// Interface for executable tools.
///
/// Handlers return a string result: the session engine has no other channel
/// to observe tool output or failure. Errors surfaced here are converted to
/// result strings by the registry before they reach the engine.
#[async_trait]
pub trait Tool: Send + Sync + Debug {
    /// Return the tool name.
    fn name(&self) -> &str;
    /// Return the tool description.
    fn description(&self) -> &str;
    /// Return the JSON schema for tool arguments.
    fn args_schema(&self) -> Value;

    /// Whether the tool supports parallel execution.
    fn supports_parallel(&self) -> bool {
        true
    }

    /// Invoke the tool with a context and arguments.
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<String, ToolError>;

    /// Build a `ToolSpec` describing this tool.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            args_schema: self.args_schema(),
        }
    }
}
