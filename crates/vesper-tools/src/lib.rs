//! Tooling interfaces and built-in tools for Vesper.

pub mod builtins;
pub mod calendar;
pub mod context;
pub mod registry;
pub mod search;
pub mod tool;
pub mod weather;

/// Built-in tool registry and registration helper.
pub use builtins::{
    AddMemoryTool, GetAllMemoriesTool, GetWeatherTool, SearchMemoryTool, WebSearchTool,
    builtin_tool_registry, register_builtin_tools,
};
/// Calendar utility types.
pub use calendar::{CalendarEvent, CalendarProvider, CalendarStart, format_events, list_upcoming};
/// Tool context types.
pub use context::{ToolContext, ToolServices};
/// Tool registry type.
pub use registry::ToolRegistry;
/// Search provider types.
pub use search::{DuckDuckGoClient, SearchHit, SearchProvider};
/// Tool trait and spec type.
pub use tool::{Tool, ToolSpec};
/// Weather provider types.
pub use weather::{WeatherProvider, WttrClient};
