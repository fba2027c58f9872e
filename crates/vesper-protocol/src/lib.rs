//! Shared message and tool vocabulary for Vesper.

pub mod message;
pub mod tool;

/// Conversation message types.
pub use message::{ChatTurn, MessageContent, Role, TranscriptEntry, UnknownRole};
/// Tool error type.
pub use tool::ToolError;
