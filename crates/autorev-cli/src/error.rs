//! Error types for autorev-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from autorev-content
    #[error(transparent)]
    Content(#[from] autorev_content::Error),

    /// Error from autorev-config
    #[error(transparent)]
    Config(#[from] autorev_config::Error),

    /// Error from autorev-fs
    #[error(transparent)]
    Fs(#[from] autorev_fs::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
