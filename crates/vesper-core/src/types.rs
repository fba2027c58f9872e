//! Core data types shared across the session lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vesper_protocol::Role;
use vesper_tools::ToolRegistry;

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// Message attached to a session context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role that produced the message.
    pub role: Role,
    /// Message content.
    pub content: String,
    /// Timestamp for the message.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Build a message stamped with the current time.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Initial message set attached to a new session.
///
/// Constructed exactly once per session, before the engine starts; empty
/// when no prior memories exist or the memory store is unavailable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeededContext {
    /// Seed messages, at most one in the current design.
    pub messages: Vec<Message>,
}

impl SeededContext {
    /// Whether the context carries no seed messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Agent definition handed to the session engine at start.
#[derive(Clone)]
pub struct AgentDefinition {
    /// Base instructions for the agent persona.
    pub instructions: String,
    /// Context seeded from prior memories.
    pub seeded_context: SeededContext,
    /// Tools exposed to the session.
    pub tools: ToolRegistry,
}

/// Input options for the transport binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionInputOptions {
    /// Whether audio input is enabled.
    pub audio_enabled: bool,
    /// Whether video input is enabled.
    pub video_enabled: bool,
}

impl Default for SessionInputOptions {
    /// Voice sessions default to audio on, video off.
    fn default() -> Self {
        Self {
            audio_enabled: true,
            video_enabled: false,
        }
    }
}
