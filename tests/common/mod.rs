#![allow(dead_code)]

use std::path::{Path, PathBuf};

use unprefixed_intl::ConfigLoader;
use unprefixed_intl::config::CONFIG_FILE_NAME;
use unprefixed_intl::fs::mock::MockFileSystem;

pub use unprefixed_intl_test_utils::builders;
pub use unprefixed_intl_test_utils::init_tracing;

/// Root of the fake project used with `MockFileSystem`.
pub const PROJECT: &str = "/project";

pub fn project_root() -> PathBuf {
    PathBuf::from(PROJECT)
}

pub fn mock_config_path() -> PathBuf {
    Path::new(PROJECT).join(CONFIG_FILE_NAME)
}

/// Empty fake project: just the root directory.
pub fn empty_project() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_dir(PROJECT);
    fs
}

/// Fake project whose config file holds `contents`.
pub fn project_with_config(contents: impl Into<Vec<u8>>) -> MockFileSystem {
    let fs = empty_project();
    fs.add_file(mock_config_path(), contents);
    fs
}

pub fn loader(fs: MockFileSystem) -> ConfigLoader<MockFileSystem> {
    ConfigLoader::with_fs(fs, PROJECT)
}
