// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! None of these ever escape [`crate::load`]: the loader turns them into a
//! diagnostic and falls back to the default configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntlError {
    /// The config file exists but could not be read as UTF-8 text.
    #[error("failed to read config from {}, cause: {source:#}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The contents are not valid JSON, or a field has the wrong type.
    #[error("failed to read config from {}, cause: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON parsed but a required property is missing, null or out of range.
    #[error("failed to read config from {}, cause: {reason}", .path.display())]
    Validation { path: PathBuf, reason: String },
}

impl IntlError {
    /// Path of the config file this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            IntlError::Read { path, .. }
            | IntlError::Parse { path, .. }
            | IntlError::Validation { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, IntlError>;
