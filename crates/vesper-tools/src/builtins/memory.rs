//! Built-in memory tools exposed to the session.

use crate::builtins::utils::parse_args;
use crate::context::ToolContext;
use crate::tool::Tool;
use async_trait::async_trait;
use log::warn;
use serde::Deserialize;
use serde_json::{Value, json};
use vesper_memory::{AddOutcome, MemoryGateway};
use vesper_protocol::{ChatTurn, ToolError};

/// Fixed reply for an empty add request; no store call is made.
const NOTHING_TO_SAVE: &str = "No messages to save";

/// Resolve the gateway from services, erroring when memory degraded away.
fn gateway(ctx: &ToolContext) -> Result<&MemoryGateway, ToolError> {
    ctx.services
        .memory
        .as_ref()
        .ok_or_else(|| ToolError::ExecutionFailed("memory gateway not configured".to_string()))
}

/// Serialize records as the JSON payload tools hand back to the session.
fn records_json(records: &[vesper_memory::MemoryRecord]) -> Result<String, ToolError> {
    serde_json::to_string_pretty(records)
        .map_err(|err| ToolError::ExecutionFailed(err.to_string()))
}

/// Tool persisting explicit conversation turns to memory.
#[derive(Debug, Default)]
pub struct AddMemoryTool;

/// Arguments for AddMemoryTool.
#[derive(Debug, Deserialize)]
struct AddMemoryArgs {
    messages: Vec<ChatTurn>,
}

#[async_trait]
impl Tool for AddMemoryTool {
    fn name(&self) -> &str {
        "add_memory"
    }

    fn description(&self) -> &str {
        "Save a list of conversation messages to the user's memory"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "messages": {
                    "type": "array",
                    "description": "Messages to save, each with a role and content.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "role": { "type": "string", "enum": ["user", "assistant", "system"] },
                            "content": { "type": "string" }
                        },
                        "required": ["role", "content"]
                    }
                }
            },
            "required": ["messages"]
        })
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<String, ToolError> {
        let input: AddMemoryArgs = parse_args(args)?;
        if input.messages.is_empty() {
            warn!("no messages provided to save (owner={})", ctx.owner);
            return Ok(NOTHING_TO_SAVE.to_string());
        }
        match gateway(ctx)?.add_turns(&input.messages, &ctx.owner).await {
            AddOutcome::Saved(count) => Ok(format!("Saved {count} messages to memory")),
            AddOutcome::Failed(message) => Ok(format!("Error saving memory: {message}")),
        }
    }
}

/// Tool searching the user's memory with a free-text query.
#[derive(Debug, Default)]
pub struct SearchMemoryTool;

/// Arguments for SearchMemoryTool.
#[derive(Debug, Deserialize)]
struct SearchMemoryArgs {
    query: String,
}

#[async_trait]
impl Tool for SearchMemoryTool {
    fn name(&self) -> &str {
        "search_memory"
    }

    fn description(&self) -> &str {
        "Search the user's memory with a query"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search string."
                }
            },
            "required": ["query"]
        })
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<String, ToolError> {
        let input: SearchMemoryArgs = parse_args(args)?;
        let records = gateway(ctx)?.search(&input.query, &ctx.owner).await;
        records_json(&records)
    }
}

/// Tool returning every memory stored for the user.
#[derive(Debug, Default)]
pub struct GetAllMemoriesTool;

#[async_trait]
impl Tool for GetAllMemoriesTool {
    fn name(&self) -> &str {
        "get_all_memories"
    }

    fn description(&self) -> &str {
        "Retrieve all stored memories for the user"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn call(&self, ctx: &ToolContext, _args: Value) -> Result<String, ToolError> {
        let records = gateway(ctx)?.get_all(&ctx.owner).await;
        records_json(&records)
    }
}
