//! Host configuration stores
//!
//! A [`ConfigurationKeeper`] exposes the surrounding application's native
//! settings: an app-settings table, a connection-strings table, and a single
//! global variable that may hold the environment tag.

use std::collections::BTreeMap;
use std::path::PathBuf;

use konfiggy_fs::ConfigStore;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::retrieval::KeyValueCollection;

/// Read-only access to the host application's configuration.
pub trait ConfigurationKeeper: Send + Sync {
    /// The full app-settings table.
    fn app_settings(&self) -> Result<KeyValueCollection>;

    /// The full connection-strings table, keyed by connection name.
    fn connection_strings(&self) -> Result<KeyValueCollection>;

    /// The global environment tag variable, if the host defines one.
    fn global_environment_tag(&self) -> Result<Option<String>>;
}

/// Serialized form of a host configuration document.
///
/// ```toml
/// environment_tag = "Dev"
///
/// [app_settings]
/// "Dev.Setting" = "x"
///
/// [connection_strings]
/// "Dev.MyConn" = "server=dev-db"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Global variable slot read by the config-file tag strategy
    pub environment_tag: Option<String>,

    pub app_settings: BTreeMap<String, String>,

    pub connection_strings: BTreeMap<String, String>,
}

/// Keeper backed by a host config file on disk.
///
/// The file is re-read on every call; edits are visible to the next lookup.
#[derive(Debug, Clone)]
pub struct FileConfigurationKeeper {
    path: PathBuf,
    store: ConfigStore,
}

impl FileConfigurationKeeper {
    /// Create a keeper for a `.toml`, `.json`, `.yaml` or `.yml` document.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store: ConfigStore::new(),
        }
    }

    fn load(&self) -> Result<HostConfig> {
        tracing::debug!(path = ?self.path, "Loading host configuration");
        Ok(self.store.load(&self.path)?)
    }
}

impl ConfigurationKeeper for FileConfigurationKeeper {
    fn app_settings(&self) -> Result<KeyValueCollection> {
        Ok(self.load()?.app_settings)
    }

    fn connection_strings(&self) -> Result<KeyValueCollection> {
        Ok(self.load()?.connection_strings)
    }

    fn global_environment_tag(&self) -> Result<Option<String>> {
        Ok(self.load()?.environment_tag)
    }
}

/// Keeper holding its tables in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigurationKeeper {
    config: HostConfig,
}

impl MemoryConfigurationKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.app_settings.insert(key.into(), value.into());
        self
    }

    pub fn with_connection_string(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.config
            .connection_strings
            .insert(name.into(), value.into());
        self
    }

    pub fn with_environment_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.environment_tag = Some(tag.into());
        self
    }
}

impl From<HostConfig> for MemoryConfigurationKeeper {
    fn from(config: HostConfig) -> Self {
        Self { config }
    }
}

impl ConfigurationKeeper for MemoryConfigurationKeeper {
    fn app_settings(&self) -> Result<KeyValueCollection> {
        Ok(self.config.app_settings.clone())
    }

    fn connection_strings(&self) -> Result<KeyValueCollection> {
        Ok(self.config.connection_strings.clone())
    }

    fn global_environment_tag(&self) -> Result<Option<String>> {
        Ok(self.config.environment_tag.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn file_keeper_reads_all_sections() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.toml");
        std::fs::write(
            &path,
            r#"
environment_tag = "QA"

[app_settings]
"QA.Setting" = "qa-value"

[connection_strings]
"QA.MyConn" = "server=qa"
"#,
        )
        .unwrap();

        let keeper = FileConfigurationKeeper::new(&path);

        assert_eq!(keeper.global_environment_tag().unwrap().as_deref(), Some("QA"));
        assert_eq!(
            keeper.app_settings().unwrap(),
            KeyValueCollection::from([("QA.Setting".into(), "qa-value".into())])
        );
        assert_eq!(
            keeper.connection_strings().unwrap(),
            KeyValueCollection::from([("QA.MyConn".into(), "server=qa".into())])
        );
    }

    #[test]
    fn file_keeper_sees_edits_between_calls() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.json");
        std::fs::write(&path, r#"{"app_settings": {"Dev.A": "1"}}"#).unwrap();

        let keeper = FileConfigurationKeeper::new(&path);
        assert_eq!(keeper.app_settings().unwrap()["Dev.A"], "1");

        std::fs::write(&path, r#"{"app_settings": {"Dev.A": "2"}}"#).unwrap();
        assert_eq!(keeper.app_settings().unwrap()["Dev.A"], "2");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.yaml");
        std::fs::write(&path, "environment_tag: Prod\n").unwrap();

        let keeper = FileConfigurationKeeper::new(&path);
        assert!(keeper.app_settings().unwrap().is_empty());
        assert!(keeper.connection_strings().unwrap().is_empty());
    }

    #[test]
    fn memory_keeper_builder() {
        let keeper = MemoryConfigurationKeeper::new()
            .with_app_setting("Dev.Setting", "x")
            .with_connection_string("Dev.MyConn", "server=dev")
            .with_environment_tag("Dev");

        assert_eq!(keeper.app_settings().unwrap()["Dev.Setting"], "x");
        assert_eq!(keeper.connection_strings().unwrap()["Dev.MyConn"], "server=dev");
        assert_eq!(keeper.global_environment_tag().unwrap().as_deref(), Some("Dev"));
    }
}
