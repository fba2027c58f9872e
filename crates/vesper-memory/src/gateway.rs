//! Absorbing gateway over the memory service.

use crate::client::MemoryService;
use crate::model::MemoryRecord;
use log::{info, warn};
use std::sync::Arc;
use vesper_protocol::ChatTurn;

/// Outcome of a store call through the gateway.
///
/// The gateway never raises: an unreachable store or rejected credentials
/// become a status the caller inspects, since an unhandled fault above this
/// boundary would crash the live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Turns were persisted; carries the count sent to the store.
    Saved(usize),
    /// Store call failed; carries a description suitable for a result string.
    Failed(String),
}

impl AddOutcome {
    /// Whether the call persisted anything.
    pub fn is_saved(&self) -> bool {
        matches!(self, AddOutcome::Saved(_))
    }
}

/// Typed gateway to the external memory store.
///
/// Explicitly constructed and injected wherever memory access is needed;
/// holds no per-call state, so one instance is shared across concurrent
/// tool invocations.
#[derive(Clone)]
pub struct MemoryGateway {
    service: Arc<dyn MemoryService>,
}

impl MemoryGateway {
    /// Wrap a memory service implementation.
    pub fn new(service: Arc<dyn MemoryService>) -> Self {
        Self { service }
    }

    /// Persist conversation turns for an owner.
    pub async fn add_turns(&self, turns: &[ChatTurn], owner: &str) -> AddOutcome {
        match self.service.add(turns, owner).await {
            Ok(()) => {
                info!(
                    "saved turns to memory (owner={}, count={})",
                    owner,
                    turns.len()
                );
                AddOutcome::Saved(turns.len())
            }
            Err(err) => {
                warn!("failed to save turns to memory (owner={}): {err}", owner);
                AddOutcome::Failed(err.to_string())
            }
        }
    }

    /// Search the owner's memories.
    ///
    /// Failure and no-match both yield an empty list; the failure case is
    /// logged so the two remain distinguishable operationally.
    pub async fn search(&self, query: &str, owner: &str) -> Vec<MemoryRecord> {
        match self.service.search(query, owner).await {
            Ok(records) => records,
            Err(err) => {
                warn!("memory search failed (owner={}): {err}", owner);
                Vec::new()
            }
        }
    }

    /// Fetch all memories for an owner, empty on failure.
    pub async fn get_all(&self, owner: &str) -> Vec<MemoryRecord> {
        match self.service.get_all(owner).await {
            Ok(records) => records,
            Err(err) => {
                warn!("memory get_all failed (owner={}): {err}", owner);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AddOutcome, MemoryGateway};
    use crate::client::MemoryService;
    use crate::error::MemoryError;
    use crate::model::MemoryRecord;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use vesper_protocol::{ChatTurn, Role};

    #[derive(Default)]
    struct RecordingService {
        added: Mutex<Vec<(Vec<ChatTurn>, String)>>,
        records: Vec<MemoryRecord>,
        fail: bool,
    }

    #[async_trait]
    impl MemoryService for RecordingService {
        async fn add(&self, turns: &[ChatTurn], owner: &str) -> Result<(), MemoryError> {
            if self.fail {
                return Err(MemoryError::Status(401));
            }
            self.added.lock().push((turns.to_vec(), owner.to_string()));
            Ok(())
        }

        async fn search(&self, _query: &str, _owner: &str) -> Result<Vec<MemoryRecord>, MemoryError> {
            if self.fail {
                return Err(MemoryError::Status(503));
            }
            Ok(self.records.clone())
        }

        async fn get_all(&self, _owner: &str) -> Result<Vec<MemoryRecord>, MemoryError> {
            self.search("", "").await
        }
    }

    #[tokio::test]
    async fn add_turns_reports_saved_count() {
        let service = Arc::new(RecordingService::default());
        let gateway = MemoryGateway::new(service.clone());
        let turns = vec![
            ChatTurn::new(Role::User, "hi"),
            ChatTurn::new(Role::Assistant, "hello"),
        ];

        let outcome = gateway.add_turns(&turns, "David").await;
        assert_eq!(outcome, AddOutcome::Saved(2));
        assert!(outcome.is_saved());

        let added = service.added.lock();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].1, "David".to_string());
    }

    #[tokio::test]
    async fn add_turns_absorbs_store_failure() {
        let service = Arc::new(RecordingService {
            fail: true,
            ..RecordingService::default()
        });
        let gateway = MemoryGateway::new(service);
        let outcome = gateway
            .add_turns(&[ChatTurn::new(Role::User, "hi")], "David")
            .await;
        match outcome {
            AddOutcome::Failed(message) => assert!(message.contains("401")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_and_get_all_return_empty_on_failure() {
        let failing = MemoryGateway::new(Arc::new(RecordingService {
            fail: true,
            ..RecordingService::default()
        }));
        assert_eq!(failing.search("job", "David").await, Vec::new());
        assert_eq!(failing.get_all("David").await, Vec::new());

        let record = MemoryRecord {
            memory: "David got the job".to_string(),
            updated_at: "2025-08-24T05:26:05Z".to_string(),
        };
        let working = MemoryGateway::new(Arc::new(RecordingService {
            records: vec![record.clone()],
            ..RecordingService::default()
        }));
        assert_eq!(working.get_all("David").await, vec![record]);
    }
}
