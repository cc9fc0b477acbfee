//! Filechain Core - task chaining for file-processing pipelines
//!
//! This crate contains the task abstraction and the workflow driver with
//! zero watcher or CLI dependencies. A file watcher, build tool, or CLI
//! frontend constructs chains from it and drives them.

pub mod chain;
pub mod config;
pub mod logging;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
