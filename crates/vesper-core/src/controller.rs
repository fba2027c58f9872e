//! Session lifecycle controller.

use crate::consolidator::consolidate_and_store;
use crate::engine::SessionEngine;
use crate::error::CoreError;
use crate::instructions::{AGENT_INSTRUCTION, SESSION_INSTRUCTION};
use crate::seeder::build_seeded_context;
use crate::types::{AgentDefinition, SessionId, SessionInputOptions};
use log::{info, warn};
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;
use vesper_memory::MemoryGateway;
use vesper_tools::ToolRegistry;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Starting,
    Active,
    ShuttingDown,
    Terminated,
}

/// Drives a session through its lifecycle: seed, start, run, consolidate.
///
/// The gateway is optional: when memory-store initialization failed at
/// startup the session still runs, it just seeds nothing and skips
/// consolidation.
pub struct SessionController {
    engine: Arc<dyn SessionEngine>,
    gateway: Option<MemoryGateway>,
    tools: ToolRegistry,
    owner: String,
    session_id: SessionId,
    state: RwLock<SessionState>,
}

impl SessionController {
    /// Build a controller for one session.
    pub fn new(
        engine: Arc<dyn SessionEngine>,
        gateway: Option<MemoryGateway>,
        tools: ToolRegistry,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            gateway,
            tools,
            owner: owner.into(),
            session_id: Uuid::new_v4(),
            state: RwLock::new(SessionState::Uninitialized),
        }
    }

    /// Identifier used for log context.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        *self.state.read()
    }

    fn transition(&self, next: SessionState) {
        *self.state.write() = next;
    }

    /// Seed context, start the engine, connect, and trigger the opening
    /// reply.
    ///
    /// A failed opening reply is logged and swallowed: the session stays
    /// active and waits for user input instead. Engine start or connect
    /// failures are fatal for the session and propagate.
    pub async fn start(&self) -> Result<(), CoreError> {
        {
            let state = self.state.read();
            if *state != SessionState::Uninitialized {
                return Err(CoreError::InvalidState(format!(
                    "start called in state {state:?}"
                )));
            }
        }
        self.transition(SessionState::Starting);
        info!(
            "starting session (session_id={}, owner={})",
            self.session_id, self.owner
        );

        let seeded_context = build_seeded_context(self.gateway.as_ref(), &self.owner).await;
        let definition = AgentDefinition {
            instructions: AGENT_INSTRUCTION.to_string(),
            seeded_context,
            tools: self.tools.clone(),
        };

        self.engine
            .start(&definition, SessionInputOptions::default())
            .await?;
        self.engine.connect().await?;

        if let Err(err) = self.engine.generate_reply(SESSION_INSTRUCTION).await {
            warn!(
                "opening reply failed (session_id={}): {err}",
                self.session_id
            );
        }

        self.transition(SessionState::Active);
        info!("session active (session_id={})", self.session_id);
        Ok(())
    }

    /// Consolidate the transcript and terminate the session.
    ///
    /// Runs to completion before returning and never raises past its
    /// boundary: shutdown is the last chance to persist the conversation,
    /// so any fault is logged instead.
    pub async fn shutdown(&self) {
        self.transition(SessionState::ShuttingDown);
        info!("shutting down session (session_id={})", self.session_id);

        match &self.gateway {
            Some(gateway) => {
                consolidate_and_store(self.engine.as_ref(), gateway, &self.owner).await;
            }
            None => {
                info!(
                    "no memory gateway, skipping consolidation (session_id={})",
                    self.session_id
                );
            }
        }

        self.transition(SessionState::Terminated);
        info!("session terminated (session_id={})", self.session_id);
    }
}
