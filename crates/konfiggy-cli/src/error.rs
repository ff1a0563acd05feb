//! Error types for konfiggy-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from konfiggy-core
    #[error(transparent)]
    Core(#[from] konfiggy_core::Error),

    /// Error from konfiggy-fs
    #[error(transparent)]
    Fs(#[from] konfiggy_fs::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
