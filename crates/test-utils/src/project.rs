use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use unprefixed_intl::config::CONFIG_FILE_NAME;

/// A throwaway project directory on the real filesystem.
///
/// Removed when dropped.
pub struct TempProject {
    dir: TempDir,
}

impl TempProject {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("creating temp project dir")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join(CONFIG_FILE_NAME)
    }

    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.config_path();
        fs::write(&path, contents).with_context(|| format!("writing {:?}", path))?;
        Ok(path)
    }

    /// Create `src/messages` under the project root.
    pub fn with_src_messages(self) -> Result<Self> {
        let dir = self.root().join("src").join("messages");
        fs::create_dir_all(&dir).with_context(|| format!("creating {:?}", dir))?;
        Ok(self)
    }
}
