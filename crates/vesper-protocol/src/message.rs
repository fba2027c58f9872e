//! Conversation message types shared between the session core and memory.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Speaker role for a conversation turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System-generated message.
    System,
    /// User-authored message.
    User,
    /// Assistant-authored message.
    Assistant,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Whether turns with this role are eligible for memory persistence.
    ///
    /// Only user and assistant turns carry conversational facts; everything
    /// else is informational and is dropped during consolidation.
    pub fn is_persistable(&self) -> bool {
        matches!(self, Role::User | Role::Assistant)
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized role string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Utterance content for a transcript entry.
///
/// Engines may deliver a turn either as a single string or as a sequence of
/// fragments that must be concatenated back into one string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageContent {
    /// Whole utterance as one string.
    Text(String),
    /// Fragmented utterance, in arrival order.
    Fragments(Vec<String>),
}

impl MessageContent {
    /// Collapse the content into a single string.
    ///
    /// Fragments are joined with no separator; callers trim the result.
    pub fn flatten(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Fragments(parts) => parts.concat(),
        }
    }
}

impl From<&str> for MessageContent {
    fn from(value: &str) -> Self {
        MessageContent::Text(value.to_string())
    }
}

/// One historical turn as enumerated from a live session engine.
///
/// Both fields are optional: engines interleave internal bookkeeping entries
/// with real turns, and an entry missing either field is malformed for
/// persistence purposes and gets filtered rather than repaired.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TranscriptEntry {
    /// Speaker role, when the engine recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Utterance content, when the engine recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
}

impl TranscriptEntry {
    /// Build a well-formed entry from a role and text content.
    pub fn new(role: Role, content: impl Into<MessageContent>) -> Self {
        Self {
            role: Some(role),
            content: Some(content.into()),
        }
    }
}

/// Normalized role and content pair handed to the memory store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    /// Speaker role.
    pub role: Role,
    /// Normalized utterance content.
    pub content: String,
}

impl ChatTurn {
    /// Build a chat turn from a role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
