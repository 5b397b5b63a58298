// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::model::{CONFIG_FILE_NAME, Config, RawConfig};
use crate::errors::{IntlError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// Outcome of [`ConfigLoader::load`]: always a usable config, plus the reason
/// the config file was rejected, if it was.
#[derive(Debug)]
pub struct Loaded {
    pub config: Config,
    pub diagnostic: Option<IntlError>,
}

impl Loaded {
    /// Emit the diagnostic (if any) as a warning.
    pub fn log_diagnostic(&self) {
        if let Some(err) = &self.diagnostic {
            warn!(path = ?err.path(), "{err}");
        }
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Resolves the i18n configuration for a project directory.
///
/// The filesystem is injectable so tests can run against
/// [`crate::fs::mock::MockFileSystem`] without touching the disk.
#[derive(Debug)]
pub struct ConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
    base_dir: PathBuf,
}

impl ConfigLoader<RealFileSystem> {
    /// Loader rooted at `base_dir` on the real filesystem.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(RealFileSystem, base_dir)
    }

    /// Loader rooted at the process working directory.
    ///
    /// If the working directory cannot be determined we fall back to ".".
    /// Paths in the resulting config are then relative.
    pub fn from_current_dir() -> Self {
        let base_dir = std::env::current_dir().unwrap_or_else(|err| {
            warn!(error = %err, "cannot read working directory, resolving paths against \".\"");
            PathBuf::from(".")
        });
        Self::new(base_dir)
    }
}

impl<F: FileSystem> ConfigLoader<F> {
    pub fn with_fs(fs: F, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `<base_dir>/unprefixed-intl.config.json`.
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }

    /// Resolve the configuration. Never fails.
    ///
    /// - Config file present and valid: adopted as written.
    /// - Config file absent: default, no diagnostic.
    /// - Config file present but unreadable, malformed or incomplete:
    ///   default, with the error returned as the diagnostic.
    pub fn load(&self) -> Loaded {
        match self.try_load_file() {
            Ok(Some(config)) => Loaded {
                config,
                diagnostic: None,
            },
            Ok(None) => Loaded {
                config: self.default_config(),
                diagnostic: None,
            },
            Err(err) => {
                debug!(error = %err, "config file rejected, using defaults");
                Loaded {
                    config: self.default_config(),
                    diagnostic: Some(err),
                }
            }
        }
    }

    /// Strict half of [`load`](Self::load).
    ///
    /// Returns `Ok(None)` when no config file exists, and an error for any
    /// other problem with it.
    pub fn try_load_file(&self) -> Result<Option<Config>> {
        let path = self.config_path();
        if !self.fs.exists(&path) {
            debug!(?path, "no config file found");
            return Ok(None);
        }

        let contents = self
            .fs
            .read_to_string(&path)
            .map_err(|source| IntlError::Read {
                path: path.clone(),
                source,
            })?;

        let config = parse_config(&path, &contents)?;
        debug!(?path, "loaded config file");
        Ok(Some(config))
    }

    /// Configuration used when no valid config file is available.
    ///
    /// `messagesPath` is `<base_dir>/src/messages` if that directory exists,
    /// otherwise `<base_dir>/messages`. The latter is not checked.
    pub fn default_config(&self) -> Config {
        let with_src = self.base_dir.join("src").join("messages");
        let messages_path = if self.fs.is_dir(&with_src) {
            with_src
        } else {
            self.base_dir.join("messages")
        };
        debug!(?messages_path, "using default config");
        Config::with_messages_path(messages_path)
    }
}

/// Load and validate a config file at an explicit path, without fallback.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let contents = RealFileSystem
        .read_to_string(path)
        .map_err(|source| IntlError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_config(path, &contents)
}

fn parse_config(path: &Path, contents: &str) -> Result<Config> {
    let raw: RawConfig = serde_json::from_str(contents).map_err(|source| IntlError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Config::try_from(raw).map_err(|reason| IntlError::Validation {
        path: path.to_path_buf(),
        reason,
    })
}
