//! Registry for tool implementations.

use crate::context::ToolContext;
use crate::tool::{Tool, ToolSpec};
use log::{debug, warn};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use vesper_protocol::ToolError;

/// In-memory registry for tool implementations.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    /// Map of tool name to implementation.
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool by name.
    pub fn register(&self, tool: Arc<dyn Tool>) {
        debug!("registering tool (name={})", tool.name());
        self.tools.write().insert(tool.name().to_string(), tool);
    }

    /// Fetch a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.read().get(name).cloned()
    }

    /// List all registered tool names.
    pub fn list(&self) -> Vec<String> {
        self.tools.read().keys().cloned().collect()
    }

    /// Return all registered tool instances.
    pub fn all(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.read().values().cloned().collect()
    }

    /// Return tool specs for all registered tools.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.read().values().map(|tool| tool.spec()).collect()
    }

    /// Invoke a tool by name, converting every fault into a result string.
    ///
    /// The session engine treats the returned string as the tool output and
    /// has no other way to observe failure, so nothing may unwind past this
    /// call. Unknown tools and argument errors become descriptive strings.
    pub async fn dispatch(&self, ctx: &ToolContext, name: &str, args: Value) -> String {
        let Some(tool) = self.get(name) else {
            warn!("dispatch for unknown tool (name={})", name);
            return ToolError::ToolNotFound(name.to_string()).to_string();
        };
        match tool.call(ctx, args).await {
            Ok(result) => result,
            Err(err) => {
                warn!("tool call failed (name={}): {err}", name);
                err.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ToolRegistry;
    use crate::context::{ToolContext, ToolServices};
    use crate::tool::Tool;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;
    use vesper_protocol::ToolError;

    #[derive(Debug, Clone)]
    struct DummyTool {
        name: &'static str,
        fail: bool,
    }

    #[async_trait]
    impl Tool for DummyTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "dummy"
        }

        fn args_schema(&self) -> serde_json::Value {
            json!({})
        }

        async fn call(
            &self,
            _ctx: &ToolContext,
            _args: serde_json::Value,
        ) -> Result<String, ToolError> {
            if self.fail {
                return Err(ToolError::ExecutionFailed("boom".to_string()));
            }
            Ok("ok".to_string())
        }
    }

    fn base_context() -> ToolContext {
        ToolContext::new("David", Arc::new(ToolServices::default()))
    }

    #[test]
    fn registry_tracks_tools_and_specs() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool {
            name: "get_weather",
            fail: false,
        }));
        registry.register(Arc::new(DummyTool {
            name: "web_search",
            fail: false,
        }));

        let mut names = registry.list();
        names.sort();
        assert_eq!(names, vec!["get_weather", "web_search"]);

        let specs = registry.specs();
        let mut spec_names = specs.into_iter().map(|spec| spec.name).collect::<Vec<_>>();
        spec_names.sort();
        assert_eq!(spec_names, vec!["get_weather", "web_search"]);
    }

    #[tokio::test]
    async fn dispatch_returns_result_string() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool {
            name: "echo",
            fail: false,
        }));
        let result = registry.dispatch(&base_context(), "echo", json!({})).await;
        assert_eq!(result, "ok".to_string());
    }

    #[tokio::test]
    async fn dispatch_converts_faults_into_strings() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool {
            name: "broken",
            fail: true,
        }));

        let result = registry
            .dispatch(&base_context(), "broken", json!({}))
            .await;
        assert_eq!(result, "execution failed: boom".to_string());

        let missing = registry
            .dispatch(&base_context(), "missing", json!({}))
            .await;
        assert_eq!(missing, "tool not found: missing".to_string());
    }
}
