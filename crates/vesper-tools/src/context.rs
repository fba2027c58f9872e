//! Shared context handed to tool invocations.

use crate::search::SearchProvider;
use crate::weather::WeatherProvider;
use std::sync::Arc;
use vesper_memory::MemoryGateway;

/// Process-wide collaborators available to tools.
///
/// Built once at startup and shared across concurrent invocations; none of
/// the members holds mutable cross-call state, so no locking is needed.
#[derive(Clone, Default)]
pub struct ToolServices {
    /// Memory gateway, absent when store initialization degraded.
    pub memory: Option<MemoryGateway>,
    /// Weather provider for `get_weather`.
    pub weather: Option<Arc<dyn WeatherProvider>>,
    /// Search provider for `web_search`.
    pub search: Option<Arc<dyn SearchProvider>>,
}

/// Per-session context for tool execution.
#[derive(Clone)]
pub struct ToolContext {
    /// Owner identity used to scope memory operations.
    pub owner: String,
    /// Shared service handles.
    pub services: Arc<ToolServices>,
}

impl ToolContext {
    /// Build a context for an owner with the given services.
    pub fn new(owner: impl Into<String>, services: Arc<ToolServices>) -> Self {
        Self {
            owner: owner.into(),
            services,
        }
    }
}
