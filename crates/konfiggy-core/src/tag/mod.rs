//! Environment tag strategies
//!
//! An [`EnvironmentTagStrategy`] decides which environment ("Dev", "QA",
//! "Prod", ...) the process runs in. The tag prefixes every lookup: asking
//! for `MyFile` under tag `Prod` looks up `Prod.MyFile`.
//!
//! Strategies report an absent tag as an empty string; the engine turns
//! that into [`Error::EnvironmentTagNotFound`](crate::Error::EnvironmentTagNotFound).

mod code;
mod config_file;
mod environment_variable;
pub mod file;
mod machine_name;
mod text_file;

pub use code::CodeTagStrategy;
pub use config_file::ConfigFileGlobalVariableTagStrategy;
pub use environment_variable::{DEFAULT_TAG_VARIABLE, EnvironmentVariableTagStrategy};
pub use file::FileSettings;
pub use machine_name::MachineNameTagStrategy;
pub use text_file::TextFileTagStrategy;

use crate::Result;

/// Resolves the current environment tag.
pub trait EnvironmentTagStrategy: Send + Sync {
    fn environment_tag(&self) -> Result<String>;
}
