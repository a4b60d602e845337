//! File I/O for AutoRevision
//!
//! Reads source files and replaces them atomically, so a revision insert is
//! either fully on disk or not at all.

pub mod error;
pub mod io;

pub use error::{Error, Result};
