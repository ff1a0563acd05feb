//! Environment-qualified configuration resolution
//!
//! Konfiggy looks up configuration values by a logical key, prefixed with the
//! tag of the environment the process is running in:
//!
//! - **Tag strategies** decide the current environment ("Dev", "QA", "Prod")
//!   from code, an environment variable, the machine name, a text file, or
//!   the host configuration
//! - **Retrieval strategies** produce the key-value collection to search
//!   (app settings, connection strings, or any custom source)
//! - **[`Konfiggy`]** composes `<tag>.<key>` and looks it up, failing with a
//!   typed [`Error`] at each point of absence
//!
//! # Example
//!
//! ```
//! use konfiggy_core::{CodeTagStrategy, Konfiggy, MemoryConfigurationKeeper};
//!
//! let konfiggy = Konfiggy::new()
//!     .with_tag_strategy(CodeTagStrategy::new("Dev"))
//!     .with_configuration_keeper(
//!         MemoryConfigurationKeeper::new().with_connection_string("Dev.MyConn", "server=dev"),
//!     );
//!
//! assert_eq!(konfiggy.get_connection_string("MyConn").unwrap(), "server=dev");
//! ```

pub mod environment;
pub mod error;
pub mod keeper;
pub mod konfiggy;
pub mod retrieval;
pub mod tag;

pub use environment::{EnvironmentVariableTarget, OsEnvironment, SystemEnvironment};
pub use error::{Error, ErrorKind, Result};
pub use keeper::{
    ConfigurationKeeper, FileConfigurationKeeper, HostConfig, MemoryConfigurationKeeper,
};
pub use konfiggy::{KEY_SEPARATOR, Konfiggy, qualified_key};
pub use retrieval::{
    AppSettingsRetrievalStrategy, ConnectionStringsRetrievalStrategy, KeyValueCollection,
    KeyValueRetrievalStrategy,
};
pub use tag::{
    CodeTagStrategy, ConfigFileGlobalVariableTagStrategy, DEFAULT_TAG_VARIABLE,
    EnvironmentTagStrategy, EnvironmentVariableTagStrategy, FileSettings, MachineNameTagStrategy,
    TextFileTagStrategy,
};
