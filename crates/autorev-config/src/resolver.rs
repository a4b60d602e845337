//! Settings resolution with layered merge

use crate::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::manifest::{Manifest, RevisionSection};

/// Name of the per-project config file
pub const PROJECT_CONFIG_FILE: &str = ".autorevision.toml";

/// Effective settings for one invocation.
///
/// Unset values resolve to empty strings and are written into the block
/// as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub signature: String,
    pub message: String,
}

impl From<RevisionSection> for Settings {
    fn from(section: RevisionSection) -> Self {
        Self {
            signature: section.signature.unwrap_or_default(),
            message: section.message.unwrap_or_default(),
        }
    }
}

/// Resolves settings for a file by merging config layers
pub struct ConfigResolver {
    /// Directory the project config search starts from
    start_dir: PathBuf,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform-appropriate directory is used via `dirs::config_dir()`.
    global_config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver searching upwards from `start_dir`.
    ///
    /// Relative directories are anchored at the current directory so the
    /// search can climb above it.
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        let start_dir = start_dir.into();
        Self {
            start_dir: std::path::absolute(&start_dir).unwrap_or(start_dir),
            global_config_dir_override: None,
        }
    }

    /// Create a resolver for the file at `path`, searching from its directory
    pub fn for_file(path: &Path) -> Self {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::new(dir)
    }

    /// Use a custom global config directory instead of the user's
    pub fn with_global_config_dir(mut self, global_config_dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir_override = Some(global_config_dir.into());
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("autorevision"))
    }

    /// Path of the global config file, if a config dir is known
    pub fn global_config_path(&self) -> Option<PathBuf> {
        self.global_config_dir().map(|d| d.join("config.toml"))
    }

    /// Nearest project config at or above the start directory
    pub fn project_config_path(&self) -> Option<PathBuf> {
        self.start_dir
            .ancestors()
            .map(|dir| dir.join(PROJECT_CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Resolve settings, applying `overrides` last.
    ///
    /// Missing layers are skipped. Invalid TOML in any layer is an error.
    pub fn resolve(&self, overrides: &RevisionSection) -> Result<Settings> {
        let mut manifest = Manifest::default();

        match self.global_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(?path, "Loading global config");
                manifest.merge(&load(&path)?);
            }
            path => tracing::debug!(?path, "No global config found, skipping"),
        }

        if let Some(path) = self.project_config_path() {
            tracing::debug!(?path, "Loading project config");
            manifest.merge(&load(&path)?);
        }

        manifest.auto_revision.merge(overrides);
        Ok(Settings::from(manifest.auto_revision))
    }
}

fn load(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}
