//! Built-in web search tool.

use crate::builtins::utils::parse_args;
use crate::context::ToolContext;
use crate::tool::Tool;
use async_trait::async_trait;
use log::{error, info};
use serde::Deserialize;
use serde_json::{Value, json};
use vesper_protocol::ToolError;

/// Cap on result lines surfaced to the session.
const MAX_RESULTS: usize = 5;

/// Tool running a web query and formatting the top hits.
#[derive(Debug, Default)]
pub struct WebSearchTool;

/// Arguments for WebSearchTool.
#[derive(Debug, Deserialize)]
struct WebSearchArgs {
    query: String,
}

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the web for current information"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query to execute."
                }
            },
            "required": ["query"]
        })
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<String, ToolError> {
        let input: WebSearchArgs = parse_args(args)?;
        let query = input.query.trim();
        if query.is_empty() {
            return Err(ToolError::InvalidArguments(
                "query cannot be empty".to_string(),
            ));
        }
        let provider = ctx.services.search.as_ref().ok_or_else(|| {
            ToolError::ExecutionFailed("search provider not configured".to_string())
        })?;
        match provider.search(query).await {
            Ok(hits) if hits.is_empty() => Ok(format!("No results found for '{query}'.")),
            Ok(hits) => {
                info!("web search (query_len={}, hits={})", query.len(), hits.len());
                let lines = hits
                    .iter()
                    .take(MAX_RESULTS)
                    .map(|hit| format!("{} ({})", hit.text, hit.url))
                    .collect::<Vec<_>>();
                Ok(lines.join("\n"))
            }
            Err(err) => {
                error!("web search failed (query_len={}): {err}", query.len());
                Ok(format!(
                    "An error occurred while searching the web for '{query}'."
                ))
            }
        }
    }
}
