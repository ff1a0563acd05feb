use std::collections::HashMap;
use std::sync::Arc;

use super::EnvironmentTagStrategy;
use crate::environment::{OsEnvironment, SystemEnvironment};
use crate::{Error, Result};

/// Maps the current machine name to a tag.
///
/// Lookups are exact: host names are matched as the OS reports them.
#[derive(Clone)]
pub struct MachineNameTagStrategy {
    machine_names: HashMap<String, String>,
    environment: Arc<dyn SystemEnvironment>,
}

impl MachineNameTagStrategy {
    /// Create a strategy from a `machine name -> tag` map.
    pub fn new(machine_names: HashMap<String, String>) -> Self {
        Self {
            machine_names,
            environment: Arc::new(OsEnvironment::new()),
        }
    }

    /// Replace the OS facade the machine name is read through.
    pub fn environment(mut self, environment: Arc<dyn SystemEnvironment>) -> Self {
        self.environment = environment;
        self
    }
}

impl EnvironmentTagStrategy for MachineNameTagStrategy {
    fn environment_tag(&self) -> Result<String> {
        let machine_name = self.environment.machine_name()?;

        match self.machine_names.get(&machine_name) {
            Some(tag) => {
                tracing::debug!(%machine_name, %tag, "Mapped machine name to environment tag");
                Ok(tag.clone())
            }
            None => {
                tracing::warn!(%machine_name, "Machine name has no environment tag mapping");
                Err(Error::MachineNameNotMapped { machine_name })
            }
        }
    }
}
