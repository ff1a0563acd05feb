//! Key-value retrieval strategies
//!
//! A [`KeyValueRetrievalStrategy`] produces the full collection that a
//! qualified key is looked up in. The built-in strategies read one section
//! of the host configuration; anything else (a hand-built table, a database,
//! a remote source) plugs in by implementing the trait.

use std::collections::BTreeMap;

use crate::Result;
use crate::keeper::ConfigurationKeeper;

/// Mapping from qualified key (`<tag>.<key>`) to value.
pub type KeyValueCollection = BTreeMap<String, String>;

/// Produces the key-value collection to search.
pub trait KeyValueRetrievalStrategy {
    /// Build a fresh collection. Called once per lookup; never cached.
    fn key_value_collection(&self, keeper: &dyn ConfigurationKeeper) -> Result<KeyValueCollection>;
}

/// Reads the host's app-settings section.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppSettingsRetrievalStrategy;

impl KeyValueRetrievalStrategy for AppSettingsRetrievalStrategy {
    fn key_value_collection(&self, keeper: &dyn ConfigurationKeeper) -> Result<KeyValueCollection> {
        keeper.app_settings()
    }
}

/// Reads the host's connection-strings section.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionStringsRetrievalStrategy;

impl KeyValueRetrievalStrategy for ConnectionStringsRetrievalStrategy {
    fn key_value_collection(&self, keeper: &dyn ConfigurationKeeper) -> Result<KeyValueCollection> {
        keeper.connection_strings()
    }
}

/// A fixed table ignores the host configuration entirely.
impl KeyValueRetrievalStrategy for KeyValueCollection {
    fn key_value_collection(&self, _keeper: &dyn ConfigurationKeeper) -> Result<KeyValueCollection> {
        Ok(self.clone())
    }
}

impl<F> KeyValueRetrievalStrategy for F
where
    F: Fn(&dyn ConfigurationKeeper) -> Result<KeyValueCollection>,
{
    fn key_value_collection(&self, keeper: &dyn ConfigurationKeeper) -> Result<KeyValueCollection> {
        self(keeper)
    }
}
