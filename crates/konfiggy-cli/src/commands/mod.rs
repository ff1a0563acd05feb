//! Command implementations for konfiggy-cli

pub mod get;
pub mod list;
pub mod tag;

pub use get::{run_connection, run_get};
pub use list::run_list;
pub use tag::{run_set_tag, run_tag};

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use konfiggy_core::{
    CodeTagStrategy, ConfigFileGlobalVariableTagStrategy, ConfigurationKeeper,
    EnvironmentTagStrategy, EnvironmentVariableTagStrategy, FileConfigurationKeeper, FileSettings,
    Konfiggy, MachineNameTagStrategy, TextFileTagStrategy,
};
use konfiggy_fs::ConfigStore;

use crate::cli::TagSourceArgs;
use crate::error::Result;

/// Assemble the engine from the command-line selection.
///
/// Collaborators that were not selected stay unset; the engine reports
/// them when a lookup needs them.
pub fn build_konfiggy(config: Option<&Path>, tag_source: &TagSourceArgs) -> Result<Konfiggy> {
    let keeper: Option<Arc<dyn ConfigurationKeeper>> = config.map(|path| {
        tracing::debug!(?path, "Using host configuration file");
        Arc::new(FileConfigurationKeeper::new(path)) as Arc<dyn ConfigurationKeeper>
    });

    let mut konfiggy = Konfiggy::new();
    if let Some(strategy) = tag_strategy(tag_source, keeper.as_ref())? {
        konfiggy = konfiggy.with_shared_tag_strategy(strategy);
    }
    if let Some(keeper) = keeper {
        konfiggy = konfiggy.with_shared_configuration_keeper(keeper);
    }

    Ok(konfiggy)
}

fn tag_strategy(
    tag_source: &TagSourceArgs,
    keeper: Option<&Arc<dyn ConfigurationKeeper>>,
) -> Result<Option<Arc<dyn EnvironmentTagStrategy>>> {
    let strategy: Arc<dyn EnvironmentTagStrategy> = if let Some(tag) = &tag_source.tag {
        Arc::new(CodeTagStrategy::new(tag.as_str()))
    } else if let Some(variable) = &tag_source.env_var {
        Arc::new(EnvironmentVariableTagStrategy::with_variable(variable.as_str()))
    } else if let Some(map_path) = &tag_source.machine_map {
        let machine_names: HashMap<String, String> = ConfigStore::new().load(map_path)?;
        tracing::debug!(entries = machine_names.len(), "Loaded machine name map");
        Arc::new(MachineNameTagStrategy::new(machine_names))
    } else if let Some(tag_file) = &tag_source.tag_file {
        Arc::new(TextFileTagStrategy::new(FileSettings::new(tag_file)))
    } else if tag_source.stored_tag {
        Arc::new(TextFileTagStrategy::new(tag::stored_tag_settings()?))
    } else if let Some(keeper) = keeper {
        Arc::new(ConfigFileGlobalVariableTagStrategy::new(Arc::clone(keeper)))
    } else {
        return Ok(None);
    };

    Ok(Some(strategy))
}
