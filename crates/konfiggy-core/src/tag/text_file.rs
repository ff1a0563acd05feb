use konfiggy_fs::io;

use super::EnvironmentTagStrategy;
use super::file::{FileSettings, ensure_folders_and_file_exist};
use crate::Result;

/// Reads the tag from a plain text file.
///
/// The file (and its directory) is created empty on first use; an empty
/// file yields an empty tag. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, Default)]
pub struct TextFileTagStrategy {
    file_settings: Option<FileSettings>,
}

impl TextFileTagStrategy {
    pub fn new(file_settings: FileSettings) -> Self {
        Self {
            file_settings: Some(file_settings),
        }
    }

    /// A strategy with no storage location; every call fails until
    /// settings are provided.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn with_file_settings(mut self, file_settings: FileSettings) -> Self {
        self.file_settings = Some(file_settings);
        self
    }

    pub fn file_settings(&self) -> Option<&FileSettings> {
        self.file_settings.as_ref()
    }

    /// Persist `tag` as the stored environment tag, replacing any previous one.
    pub fn store_tag(&self, tag: &str) -> Result<()> {
        let settings = ensure_folders_and_file_exist(self.file_settings.as_ref())?;
        let path = settings.environment_tag_storage_file_path();
        tracing::debug!(?path, tag, "Storing environment tag");
        io::write_text(path, tag)?;
        Ok(())
    }
}

impl EnvironmentTagStrategy for TextFileTagStrategy {
    fn environment_tag(&self) -> Result<String> {
        let settings = ensure_folders_and_file_exist(self.file_settings.as_ref())?;
        Ok(io::read_and_trim(settings.environment_tag_storage_file_path())?)
    }
}
