//! Error types for konfiggy-core

/// Result type for konfiggy-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// The failure taxonomy, independent of which variant carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A logical key or name was empty.
    InvalidArgument,
    /// No tag strategy or no configuration keeper was configured.
    ConfigurationMissing,
    /// A file-backed tag strategy has no file settings.
    SettingsNotSet,
    /// The tag strategy produced an empty tag.
    TagNotFound,
    /// The qualified key is absent or maps to an empty value.
    KeyNotFound,
    /// The current machine name has no entry in the machine name map.
    MachineNameNotMapped,
    /// An external collaborator (filesystem, OS) failed.
    External,
}

/// Errors that can occur while resolving environment-qualified values
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required key or name argument was empty
    #[error("Argument `{argument}` must not be empty")]
    InvalidArgument { argument: &'static str },

    #[error("No environment tag strategy has been configured")]
    TagStrategyNotSet,

    #[error("No configuration keeper has been configured")]
    ConfigurationKeeperNotSet,

    #[error("File settings must be provided before using a file-based tag strategy")]
    FileSettingsNotSet,

    #[error("Could not find any environment tag with the configured tag strategy")]
    EnvironmentTagNotFound,

    /// The fully qualified key (`<tag>.<key>`) had no non-empty value
    #[error("Could not find any configuration entry with the key {key}")]
    KeyNotFound { key: String },

    #[error("Machine name {machine_name} is not mapped to an environment tag")]
    MachineNameNotMapped { machine_name: String },

    #[error("Could not determine the machine name: {message}")]
    MachineNameUnavailable { message: String },

    /// Filesystem or config-document error from konfiggy-fs
    #[error(transparent)]
    Fs(#[from] konfiggy_fs::Error),
}

impl Error {
    /// Classify this error into its [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::TagStrategyNotSet | Self::ConfigurationKeeperNotSet => {
                ErrorKind::ConfigurationMissing
            }
            Self::FileSettingsNotSet => ErrorKind::SettingsNotSet,
            Self::EnvironmentTagNotFound => ErrorKind::TagNotFound,
            Self::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            Self::MachineNameNotMapped { .. } => ErrorKind::MachineNameNotMapped,
            Self::MachineNameUnavailable { .. } | Self::Fs(_) => ErrorKind::External,
        }
    }
}
