//! Consolidates a finished session's transcript into the memory store.

use crate::engine::SessionEngine;
use log::{info, warn};
use vesper_memory::{AddOutcome, MemoryGateway};
use vesper_protocol::{ChatTurn, TranscriptEntry};

/// Reduce raw transcript entries to the turns worth persisting.
///
/// Entries missing a role or content are skipped, fragmented content is
/// flattened with no separator, whitespace is trimmed, and only user and
/// assistant turns survive. Original order is preserved.
pub fn consolidate(entries: &[TranscriptEntry]) -> Vec<ChatTurn> {
    entries
        .iter()
        .filter_map(|entry| {
            let role = entry.role?;
            if !role.is_persistable() {
                return None;
            }
            let content = entry.content.as_ref()?.flatten();
            Some(ChatTurn::new(role, content.trim()))
        })
        .collect()
}

/// Drain the engine's history into the memory store.
///
/// Runs during shutdown, so it absorbs every fault: an empty transcript is
/// logged and skipped without touching the store, and a failed store call is
/// logged through the gateway's outcome. Never raises.
pub async fn consolidate_and_store(
    engine: &dyn SessionEngine,
    gateway: &MemoryGateway,
    owner: &str,
) {
    let turns = consolidate(&engine.history());
    if turns.is_empty() {
        warn!("no messages to save (owner={owner})");
        return;
    }

    match gateway.add_turns(&turns, owner).await {
        AddOutcome::Saved(count) => {
            info!("consolidated session transcript (owner={owner}, count={count})");
        }
        AddOutcome::Failed(message) => {
            warn!("transcript consolidation failed (owner={owner}): {message}");
        }
    }
}
