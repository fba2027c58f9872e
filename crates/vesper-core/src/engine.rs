//! Seam to the external live session engine.

use crate::error::CoreError;
use crate::types::{AgentDefinition, SessionInputOptions};
use async_trait::async_trait;
use vesper_protocol::TranscriptEntry;

/// Live speech/LLM session engine, treated as an opaque collaborator.
///
/// The core only requires a way to start the session with an agent
/// definition and transport binding, trigger replies, and enumerate
/// `{role, content}` for every historical turn.
#[async_trait]
pub trait SessionEngine: Send + Sync {
    /// Start the session with an agent definition and input options.
    async fn start(
        &self,
        definition: &AgentDefinition,
        input: SessionInputOptions,
    ) -> Result<(), CoreError>;

    /// Connect the underlying transport.
    async fn connect(&self) -> Result<(), CoreError>;

    /// Generate a reply from session-level instructions.
    async fn generate_reply(&self, instructions: &str) -> Result<(), CoreError>;

    /// Enumerate the accumulated message history in original turn order.
    fn history(&self) -> Vec<TranscriptEntry>;
}
