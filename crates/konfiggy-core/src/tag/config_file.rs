use std::sync::Arc;

use super::EnvironmentTagStrategy;
use crate::Result;
use crate::keeper::ConfigurationKeeper;

/// Reads the tag from the host configuration's global variable slot.
///
/// A host config without the variable yields an empty tag.
#[derive(Clone)]
pub struct ConfigFileGlobalVariableTagStrategy {
    keeper: Arc<dyn ConfigurationKeeper>,
}

impl ConfigFileGlobalVariableTagStrategy {
    pub fn new(keeper: Arc<dyn ConfigurationKeeper>) -> Self {
        Self { keeper }
    }
}

impl EnvironmentTagStrategy for ConfigFileGlobalVariableTagStrategy {
    fn environment_tag(&self) -> Result<String> {
        Ok(self.keeper.global_environment_tag()?.unwrap_or_default())
    }
}
