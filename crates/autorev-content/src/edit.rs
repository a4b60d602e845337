//! Edit types for revision insertion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A (line, column) position in a document, both 0-based.
///
/// Revision blocks always start a line, so `column` is 0 for every point
/// this crate produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionPoint {
    pub line: usize,
    pub column: usize,
}

impl InsertionPoint {
    /// Document start
    pub const START: Self = Self { line: 0, column: 0 };

    /// Start of the given line
    pub fn line_start(line: usize) -> Self {
        Self { line, column: 0 }
    }
}

impl fmt::Display for InsertionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Which revision block an edit inserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditKind {
    /// Full default header carrying `REV.00`
    FirstRevision,
    /// A single new entry after an existing one
    NextRevision { number: String },
}

/// A single insertion into document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// The kind of edit.
    pub kind: EditKind,
    /// Line position of the insertion.
    pub point: InsertionPoint,
    /// Byte span replaced in the original source (zero-width for inserts).
    pub span: Range<usize>,
    /// Inserted text.
    pub new_content: String,
}

impl Edit {
    /// Apply this edit to a source string.
    pub fn apply(&self, source: &str) -> String {
        let mut result = String::with_capacity(source.len() + self.new_content.len());
        result.push_str(&source[..self.span.start]);
        result.push_str(&self.new_content);
        result.push_str(&source[self.span.end..]);
        result
    }
}
