//! Test helpers shared across Vesper crates.

pub mod memory;
pub mod providers;

pub use memory::RecordingMemoryService;
pub use providers::{StaticSearch, StaticWeather};
