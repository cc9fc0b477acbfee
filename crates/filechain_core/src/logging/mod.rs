//! Logging types and helpers.
//!
//! Chains write their run output through the sinks on `TaskContext`; this
//! module supplies the shared vocabulary for that output (levels, message
//! prefixes, line stamping) and an opt-in `tracing` subscriber for
//! binaries embedding the crate.

mod types;

pub use types::{LogLevel, MessagePrefix};

use chrono::Local;

/// Prefix a message with a local `[HH:MM:SS]` timestamp.
pub fn stamp(message: &str) -> String {
    let timestamp = Local::now().format("%H:%M:%S");
    format!("[{}] {}", timestamp, message)
}

/// Install a global `tracing` subscriber honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops. The library
/// itself only emits events; installing a subscriber is the embedding
/// binary's choice.
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Install a global `tracing` subscriber at a fixed level.
pub fn init_with(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level.to_tracing_level())
        .try_init();
}
