//! Manifest parsing for AutoRevision config files
//!
//! A manifest is one parsed config file. Unset keys stay `None` so a later
//! layer only overrides what it actually sets.

use crate::Result;
use serde::{Deserialize, Serialize};

/// The `[autoRevision]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionSection {
    /// Author identifier written after `BY.`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// Description written under each new entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RevisionSection {
    /// Overlay `other` onto this section; keys set in `other` win
    pub fn merge(&mut self, other: &RevisionSection) {
        if let Some(signature) = &other.signature {
            self.signature = Some(signature.clone());
        }
        if let Some(message) = &other.message {
            self.message = Some(message.clone());
        }
    }
}

/// A single parsed config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "autoRevision", default)]
    pub auto_revision: RevisionSection,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use autorev_config::Manifest;
    ///
    /// let manifest = Manifest::parse(r#"
    /// [autoRevision]
    /// signature = "AB"
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.auto_revision.signature.as_deref(), Some("AB"));
    /// assert_eq!(manifest.auto_revision.message, None);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Merge another manifest into this one (`other` takes precedence)
    pub fn merge(&mut self, other: &Manifest) {
        self.auto_revision.merge(&other.auto_revision);
    }
}
