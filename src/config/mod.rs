// src/config/mod.rs

//! Configuration loading and validation for unprefixed-intl.
//!
//! Responsibilities:
//! - Define the JSON-backed data model (`model.rs`).
//! - Locate and read the config file, or fall back to defaults (`loader.rs`).
//! - Check that every required property is present (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{ConfigLoader, Loaded, load_from_path};
pub use model::{
    CONFIG_FILE_NAME, Config, DEFAULT_ALLOW_LANGUAGE_CODE, DEFAULT_LANG,
    DEFAULT_MAX_ACCEPTED_LANGUAGE_SEARCH, RawConfig,
};
