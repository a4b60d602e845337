//! Configuration resolution for AutoRevision
//!
//! Two settings feed every generated block: `signature` (who) and
//! `message` (what). They are merged from these sources, later overriding
//! earlier:
//!
//! 1. **Global** - `<config_dir>/autorevision/config.toml`
//! 2. **Project** - the nearest `.autorevision.toml` at or above the
//!    target file's directory
//! 3. **Overrides** - command-line flags and environment variables
//!
//! Each file carries an `[autoRevision]` table:
//!
//! ```toml
//! [autoRevision]
//! signature = "AB"
//! message = "fix typo"
//! ```
//!
//! Values are read fresh on every resolve and passed through verbatim.

mod error;
mod manifest;
mod resolver;

pub use error::{Error, Result};
pub use manifest::{Manifest, RevisionSection};
pub use resolver::{ConfigResolver, PROJECT_CONFIG_FILE, Settings};
