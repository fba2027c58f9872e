//! Seeds new sessions with the owner's prior memories.

use crate::types::{Message, SeededContext};
use log::{debug, warn};
use vesper_memory::MemoryGateway;
use vesper_protocol::Role;

/// Build the initial context for a session from the owner's stored memories.
///
/// Fetches all memories for the owner and folds them into a single assistant
/// message so the model treats the facts as its own prior knowledge rather
/// than something the user just said. Every degraded path yields an empty
/// context: no gateway configured, no records stored, store unreachable, or
/// the records failing to serialize.
pub async fn build_seeded_context(gateway: Option<&MemoryGateway>, owner: &str) -> SeededContext {
    let Some(gateway) = gateway else {
        debug!("no memory gateway configured, seeding empty context (owner={owner})");
        return SeededContext::default();
    };

    let records = gateway.get_all(owner).await;
    if records.is_empty() {
        debug!("no prior memories found (owner={owner})");
        return SeededContext::default();
    }

    let payload = match serde_json::to_string(&records) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("failed to serialize memories for seeding (owner={owner}): {err}");
            return SeededContext::default();
        }
    };

    debug!(
        "seeding context from prior memories (owner={}, count={})",
        owner,
        records.len()
    );
    SeededContext {
        messages: vec![Message::new(Role::Assistant, seed_text(owner, &payload))],
    }
}

/// Seed message wrapping the serialized memories.
fn seed_text(owner: &str, payload: &str) -> String {
    format!("The user's name is {owner}, and this is relevant context about him: {payload}.")
}
