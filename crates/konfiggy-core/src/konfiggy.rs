//! The resolution engine
//!
//! [`Konfiggy`] combines an environment tag strategy with a key-value
//! retrieval strategy: asking for `MyFile` while the tag resolves to `Prod`
//! looks up `Prod.MyFile` in the collection the retrieval strategy produces.
//!
//! The engine is immutable once built. The retrieval strategy is chosen per
//! call, so concurrent lookups never observe each other's source.

use std::fmt;
use std::sync::Arc;

use crate::keeper::ConfigurationKeeper;
use crate::retrieval::{
    AppSettingsRetrievalStrategy, ConnectionStringsRetrievalStrategy, KeyValueCollection,
    KeyValueRetrievalStrategy,
};
use crate::tag::EnvironmentTagStrategy;
use crate::{Error, Result};

/// Separator between the environment tag and the logical key.
pub const KEY_SEPARATOR: char = '.';

/// Compose the qualified key `<tag>.<key>` that is looked up in a collection.
///
/// The separator is not escaped; a tag or key containing `.` can produce the
/// same qualified key as a different tag/key pair.
pub fn qualified_key(environment_tag: &str, key: &str) -> String {
    format!("{environment_tag}{KEY_SEPARATOR}{key}")
}

/// Resolves environment-qualified configuration values.
///
/// # Example
///
/// ```
/// use konfiggy_core::{CodeTagStrategy, Konfiggy, MemoryConfigurationKeeper};
///
/// let konfiggy = Konfiggy::new()
///     .with_tag_strategy(CodeTagStrategy::new("Dev"))
///     .with_configuration_keeper(
///         MemoryConfigurationKeeper::new().with_app_setting("Dev.Setting", "x"),
///     );
///
/// assert_eq!(konfiggy.get_app_setting("Setting").unwrap(), "x");
/// ```
#[derive(Clone, Default)]
pub struct Konfiggy {
    tag_strategy: Option<Arc<dyn EnvironmentTagStrategy>>,
    configuration_keeper: Option<Arc<dyn ConfigurationKeeper>>,
}

impl Konfiggy {
    /// An engine with nothing configured. Every lookup fails with a
    /// configuration-missing error until both collaborators are set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_strategy(self, strategy: impl EnvironmentTagStrategy + 'static) -> Self {
        self.with_shared_tag_strategy(Arc::new(strategy))
    }

    pub fn with_shared_tag_strategy(mut self, strategy: Arc<dyn EnvironmentTagStrategy>) -> Self {
        self.tag_strategy = Some(strategy);
        self
    }

    pub fn with_configuration_keeper(self, keeper: impl ConfigurationKeeper + 'static) -> Self {
        self.with_shared_configuration_keeper(Arc::new(keeper))
    }

    /// Use a keeper that is also shared with other collaborators, such as a
    /// [`ConfigFileGlobalVariableTagStrategy`](crate::ConfigFileGlobalVariableTagStrategy).
    pub fn with_shared_configuration_keeper(mut self, keeper: Arc<dyn ConfigurationKeeper>) -> Self {
        self.configuration_keeper = Some(keeper);
        self
    }

    /// Get an app setting for the current environment.
    pub fn get_app_setting(&self, key: &str) -> Result<String> {
        self.get_value("key", key, &AppSettingsRetrievalStrategy)
    }

    /// Get a connection string for the current environment.
    pub fn get_connection_string(&self, name: &str) -> Result<String> {
        self.get_value("name", name, &ConnectionStringsRetrievalStrategy)
    }

    /// Get a value from a caller-supplied key-value source.
    pub fn get_custom(&self, key: &str, strategy: &dyn KeyValueRetrievalStrategy) -> Result<String> {
        self.get_value("key", key, strategy)
    }

    /// Resolve the current environment tag, failing if it is empty.
    pub fn environment_tag(&self) -> Result<String> {
        let tag_strategy = self.tag_strategy.as_deref().ok_or(Error::TagStrategyNotSet)?;
        resolve_tag(tag_strategy)
    }

    /// All app settings, for every environment, keyed as stored.
    pub fn app_settings(&self) -> Result<KeyValueCollection> {
        self.keeper()?.app_settings()
    }

    /// All connection strings, for every environment, keyed as stored.
    pub fn connection_strings(&self) -> Result<KeyValueCollection> {
        self.keeper()?.connection_strings()
    }

    /// App settings of the current environment, keyed without the tag prefix.
    pub fn environment_app_settings(&self) -> Result<KeyValueCollection> {
        self.environment_view(&AppSettingsRetrievalStrategy)
    }

    /// Connection strings of the current environment, keyed without the tag prefix.
    pub fn environment_connection_strings(&self) -> Result<KeyValueCollection> {
        self.environment_view(&ConnectionStringsRetrievalStrategy)
    }

    fn get_value(
        &self,
        argument: &'static str,
        key: &str,
        strategy: &dyn KeyValueRetrievalStrategy,
    ) -> Result<String> {
        let (tag_strategy, keeper) = self.verify_configurations()?;

        if key.is_empty() {
            return Err(Error::InvalidArgument { argument });
        }

        let environment_tag = resolve_tag(tag_strategy)?;
        let full_key = qualified_key(&environment_tag, key);
        tracing::debug!(%environment_tag, %full_key, "Resolving qualified key");

        let collection = strategy.key_value_collection(keeper)?;
        tracing::trace!(entries = collection.len(), "Fetched key-value collection");

        value_for_key(&full_key, &collection)
    }

    fn environment_view(&self, strategy: &dyn KeyValueRetrievalStrategy) -> Result<KeyValueCollection> {
        let (tag_strategy, keeper) = self.verify_configurations()?;
        let environment_tag = resolve_tag(tag_strategy)?;
        let prefix = qualified_key(&environment_tag, "");

        let view: KeyValueCollection = strategy
            .key_value_collection(keeper)?
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_string(), value))
            })
            .collect();

        tracing::debug!(%environment_tag, entries = view.len(), "Built environment view");
        Ok(view)
    }

    fn verify_configurations(
        &self,
    ) -> Result<(&dyn EnvironmentTagStrategy, &dyn ConfigurationKeeper)> {
        let tag_strategy = self.tag_strategy.as_deref().ok_or(Error::TagStrategyNotSet)?;
        Ok((tag_strategy, self.keeper()?))
    }

    fn keeper(&self) -> Result<&dyn ConfigurationKeeper> {
        self.configuration_keeper
            .as_deref()
            .ok_or(Error::ConfigurationKeeperNotSet)
    }
}

impl fmt::Debug for Konfiggy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Konfiggy")
            .field("tag_strategy_set", &self.tag_strategy.is_some())
            .field("configuration_keeper_set", &self.configuration_keeper.is_some())
            .finish()
    }
}

fn resolve_tag(tag_strategy: &dyn EnvironmentTagStrategy) -> Result<String> {
    let environment_tag = tag_strategy.environment_tag()?;
    if environment_tag.is_empty() {
        return Err(Error::EnvironmentTagNotFound);
    }
    Ok(environment_tag)
}

fn value_for_key(full_key: &str, collection: &KeyValueCollection) -> Result<String> {
    match collection.get(full_key) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(Error::KeyNotFound {
            key: full_key.to_string(),
        }),
    }
}
