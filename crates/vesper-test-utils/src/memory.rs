use async_trait::async_trait;
use parking_lot::Mutex;
use vesper_memory::{MemoryError, MemoryRecord, MemoryService};
use vesper_protocol::ChatTurn;

/// Memory service double that records store calls and serves canned records.
#[derive(Default)]
pub struct RecordingMemoryService {
    added: Mutex<Vec<(Vec<ChatTurn>, String)>>,
    records: Vec<MemoryRecord>,
    fail: bool,
}

impl RecordingMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<MemoryRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Every `(turns, owner)` pair passed to `add`, in call order.
    pub fn added(&self) -> Vec<(Vec<ChatTurn>, String)> {
        self.added.lock().clone()
    }
}

#[async_trait]
impl MemoryService for RecordingMemoryService {
    async fn add(&self, turns: &[ChatTurn], owner: &str) -> Result<(), MemoryError> {
        if self.fail {
            return Err(MemoryError::Status(503));
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
        if self.fail {
            return Err(MemoryError::Status(503));
        }
        Ok(self.records.clone())
    }
}
