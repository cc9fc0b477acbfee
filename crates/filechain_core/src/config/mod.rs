//! Configuration for drivers embedding the chain.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Defaults for anything the file omits
//!
//! # Example
//!
//! ```no_run
//! use filechain_core::config::ConfigManager;
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/filechain.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Verbose: {}", config.settings().run.verbose);
//!
//! // Modify a setting and persist it
//! config.settings_mut().logging.show_timestamps = true;
//! config.save().unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{LoggingSettings, RunSettings, Settings};
