//! Built-in tools bundled with Vesper.

mod memory;
mod utils;
mod weather;
mod web;

use crate::registry::ToolRegistry;
use log::info;
use std::sync::Arc;

pub use memory::{AddMemoryTool, GetAllMemoriesTool, SearchMemoryTool};
pub use weather::GetWeatherTool;
pub use web::WebSearchTool;

/// Register all built-in tools with the provided registry.
pub fn register_builtin_tools(registry: &ToolRegistry) {
    registry.register(Arc::new(GetWeatherTool));
    registry.register(Arc::new(WebSearchTool));
    registry.register(Arc::new(AddMemoryTool));
    registry.register(Arc::new(SearchMemoryTool));
    registry.register(Arc::new(GetAllMemoriesTool));
    info!("registered built-in tools");
}

/// Build a registry pre-populated with built-in tools.
pub fn builtin_tool_registry() -> ToolRegistry {
    let registry = ToolRegistry::new();
    register_builtin_tools(&registry);
    registry
}
