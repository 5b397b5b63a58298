// src/lib.rs

//! Configuration bootstrap for the unprefixed-intl i18n helpers.
//!
//! The preferred entry point is explicit:
//!
//! ```no_run
//! let loaded = unprefixed_intl::ConfigLoader::from_current_dir().load();
//! loaded.log_diagnostic();
//! let config = loaded.into_config();
//! println!("messages live in {}", config.messages_path().display());
//! ```
//!
//! [`config()`] is available for code that wants a process-wide value
//! resolved once from the working directory.

pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;

use std::sync::OnceLock;

pub use crate::config::{Config, ConfigLoader, Loaded};
pub use crate::errors::{IntlError, Result};

/// Resolve the configuration from the current working directory, logging
/// any problem with the config file.
pub fn load() -> Config {
    let loaded = ConfigLoader::from_current_dir().load();
    loaded.log_diagnostic();
    loaded.into_config()
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide configuration.
///
/// Resolved by [`load`] on first use; every later call returns the same
/// reference.
pub fn config() -> &'static Config {
    CONFIG.get_or_init(load)
}
