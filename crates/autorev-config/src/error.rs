//! Error types for autorev-config

use std::path::PathBuf;

/// Result type for autorev-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
