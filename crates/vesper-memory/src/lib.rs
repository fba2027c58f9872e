//! Long-term memory access for Vesper.

pub mod client;
pub mod error;
pub mod gateway;
pub mod model;

/// Memory service interface and hosted-store client.
pub use client::{Mem0Client, MemoryService};
/// Memory error type.
pub use error::MemoryError;
/// Absorbing gateway and store-call outcome.
pub use gateway::{AddOutcome, MemoryGateway};
/// Memory record model.
pub use model::MemoryRecord;
