//! Environment-driven configuration for Vesper.

pub mod error;
pub mod model;

/// Config error type.
pub use error::ConfigError;
/// Config model and loaders.
pub use model::{LlmConfig, MemoryConfig, TransportConfig, VesperConfig};
