//! Memory record model returned by the store.

use serde::{Deserialize, Serialize};

/// A single retrievable fact about a user.
///
/// Records are immutable once stored; there is no in-place edit operation,
/// only explicit re-adds through the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryRecord {
    /// The factual statement.
    pub memory: String,
    /// Last modification time as the ISO-8601 string the store returns.
    /// Kept verbatim for recency ordering downstream.
    pub updated_at: String,
}
