//! Comment style dispatch and the revision style trait

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::date::Stamp;
use crate::error::{Error, Result};
use crate::handlers::{BlockCommentHandler, LineCommentHandler};
use crate::locator::RevisionNumber;

/// Language id served by the `#` line-comment style
pub const RUBY: &str = "ruby";
/// Language id served by the `*` block-comment style
pub const JAVASCRIPT: &str = "javascript";

/// Comment syntax styles for revision history blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentStyle {
    /// Hash line comments: `#   REV.01 ...`
    Line,
    /// Asterisk lines inside a `/* */` block: ` *   REV.01 ...`
    Block,
}

impl CommentStyle {
    /// Select the style for an editor language id
    pub fn from_language_id(language_id: &str) -> Result<Self> {
        match language_id {
            RUBY => Ok(Self::Line),
            JAVASCRIPT => Ok(Self::Block),
            other => Err(Error::unsupported(other)),
        }
    }

    /// Language id this style serves
    pub fn language_id(&self) -> &'static str {
        match self {
            Self::Line => RUBY,
            Self::Block => JAVASCRIPT,
        }
    }

    /// File extensions recognised for this style
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Line => &["rb", "rake", "gemspec", "ru"],
            Self::Block => &["js", "mjs", "cjs", "jsx"],
        }
    }

    /// The handler that renders and places blocks for this style
    pub fn handler(&self) -> Box<dyn RevisionStyle> {
        match self {
            Self::Line => Box::new(LineCommentHandler::new()),
            Self::Block => Box::new(BlockCommentHandler::new()),
        }
    }

    pub fn all() -> [Self; 2] {
        [Self::Line, Self::Block]
    }
}

/// Guess an editor language id from a file path.
///
/// Returns `None` when nothing matches; callers treat that the same as an
/// unsupported language.
pub fn language_id_for_path(path: &Path) -> Option<&'static str> {
    let name = path.file_name()?.to_str()?;
    if matches!(name, "Rakefile" | "Gemfile") {
        return Some(RUBY);
    }

    let ext = path.extension()?.to_str()?.to_lowercase();
    CommentStyle::all()
        .into_iter()
        .find(|style| style.extensions().contains(&ext.as_str()))
        .map(|style| style.language_id())
}

/// Rendering and placement rules for one comment style.
///
/// Every operation is required: a style that forgets one fails to compile
/// instead of emitting an empty block.
pub trait RevisionStyle: Send + Sync {
    /// Style identifier
    fn comment_style(&self) -> CommentStyle;

    /// Whether `line` is the rule line a new entry goes in front of
    fn is_delimiter(&self, line: &str) -> bool;

    /// Full header with a `REV.00` entry, for documents without history
    fn first_block(&self, stamp: &Stamp) -> String;

    /// A single entry numbered `number`
    fn next_block(&self, number: &RevisionNumber, stamp: &Stamp) -> String;
}
