//! Public SDK surface for Vesper.
//!
//! This crate re-exports the core building blocks and provides a small
//! initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use vesper_config as config;
pub use vesper_core as core;
/// Re-export for convenience.
pub use vesper_memory as memory;
/// Re-export for convenience.
pub use vesper_protocol as protocol;
/// Re-export for convenience.
pub use vesper_tools as tools;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Hosts are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
