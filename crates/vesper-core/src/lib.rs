//! Session lifecycle core for Vesper.
//!
//! Wires a live session engine to the memory gateway and tool registry:
//! seeds new sessions from prior memories, drives the start sequence, and
//! consolidates the transcript back into the store at shutdown.

pub mod consolidator;
pub mod controller;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod seeder;
pub mod types;

/// Transcript consolidation entry points.
pub use consolidator::{consolidate, consolidate_and_store};
/// Session controller and its lifecycle states.
pub use controller::{SessionController, SessionState};
/// Engine seam.
pub use engine::SessionEngine;
/// Core error type.
pub use error::CoreError;
/// Instruction constants.
pub use instructions::{AGENT_INSTRUCTION, SESSION_INSTRUCTION};
/// Context seeding.
pub use seeder::build_seeded_context;
/// Core data types.
pub use types::{AgentDefinition, Message, SeededContext, SessionId, SessionInputOptions};
