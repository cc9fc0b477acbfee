//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Every field defaults, so a partial (or absent) file still loads.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Run behavior settings.
    #[serde(default)]
    pub run: RunSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Behavior of a workflow run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSettings {
    /// Emit per-task diagnostics to the context's output sink.
    #[serde(default)]
    pub verbose: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level for the tracing subscriber.
    #[serde(default)]
    pub level: LogLevel,

    /// Stamp diagnostic lines with a local timestamp.
    #[serde(default)]
    pub show_timestamps: bool,
}
