//! Shared storage handling for file-backed tag strategies

use std::path::{Path, PathBuf};

use konfiggy_fs::io;

use crate::{Error, Result};

const APP_DIR: &str = "konfiggy";
const TAG_FILE_NAME: &str = "environment-tag.txt";

/// Where a file-backed strategy stores its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSettings {
    environment_tag_storage_file_path: PathBuf,
}

impl FileSettings {
    pub fn new(environment_tag_storage_file_path: impl Into<PathBuf>) -> Self {
        Self {
            environment_tag_storage_file_path: environment_tag_storage_file_path.into(),
        }
    }

    /// Settings pointing at the per-user config directory:
    /// - Linux: `~/.config/konfiggy/environment-tag.txt`
    /// - macOS: `~/Library/Application Support/konfiggy/environment-tag.txt`
    /// - Windows: `%APPDATA%\konfiggy\environment-tag.txt`
    ///
    /// Returns `None` when the platform has no config directory.
    pub fn platform_default() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR).join(TAG_FILE_NAME)))
    }

    pub fn environment_tag_storage_file_path(&self) -> &Path {
        &self.environment_tag_storage_file_path
    }
}

/// Make sure the storage directory and file exist, creating them if needed.
///
/// Existing files are left untouched, so repeated calls are harmless.
pub fn ensure_folders_and_file_exist(settings: Option<&FileSettings>) -> Result<&FileSettings> {
    let settings = settings.ok_or(Error::FileSettingsNotSet)?;
    let path = settings.environment_tag_storage_file_path();

    io::ensure_path_exists(path)?;
    if io::create_file_if_not_exists(path)? {
        tracing::debug!(?path, "Created environment tag storage file");
    }

    Ok(settings)
}
