// src/logging.rs

//! Logging setup for applications embedding `unprefixed-intl`, using
//! `tracing` + `tracing-subscriber`.
//!
//! The library itself only emits events; installing a subscriber is the
//! application's call. This helper covers the common case:
//! 1. explicit `level` argument (if provided)
//! 2. `RUST_LOG` filter directives
//! 3. default to `info`
//!
//! Logs go to STDERR.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialise the global logging subscriber.
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(level: Option<tracing::Level>) -> Result<()> {
    let filter = match level {
        Some(lvl) => EnvFilter::new(lvl.as_str().to_lowercase()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

