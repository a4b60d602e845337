//! Command implementations for autorev-cli

pub mod languages;
pub mod show;
pub mod stamp;

pub use languages::run_languages;
pub use show::run_show;
pub use stamp::{StampOptions, run_stamp};

use std::path::Path;

use autorev_content::{CommentStyle, Error as ContentError, language_id_for_path};
use colored::Colorize;
use serde_json::json;

use crate::error::Result;

/// Notice shown for files no comment style covers
pub const UNSUPPORTED_NOTICE: &str = "AutoRevision does not support this file type yet.";

/// Language id from the explicit flag, or guessed from the file name.
///
/// Unrecognised files report their extension (or `unknown`) so the notice
/// can name what was rejected.
pub(crate) fn language_id(file: &Path, language: Option<&str>) -> String {
    if let Some(id) = language {
        return id.to_string();
    }
    language_id_for_path(file)
        .map(str::to_string)
        .or_else(|| {
            file.extension()
                .map(|ext| ext.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Comment style for `language_id`, or `None` after printing the
/// unsupported-file notice.
pub(crate) fn resolve_style(language_id: &str, json: bool) -> Result<Option<CommentStyle>> {
    match CommentStyle::from_language_id(language_id) {
        Ok(style) => Ok(Some(style)),
        Err(ContentError::UnsupportedLanguage(id)) => {
            tracing::debug!(language = %id, "Unsupported language, leaving file untouched");
            if json {
                let output = json!({
                    "status": "unsupported",
                    "language": id,
                    "message": UNSUPPORTED_NOTICE,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{} {} ({})", "info:".cyan().bold(), UNSUPPORTED_NOTICE, id.dimmed());
            }
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_id_prefers_flag() {
        assert_eq!(language_id(Path::new("a.js"), Some("ruby")), "ruby");
    }

    #[test]
    fn language_id_detects_from_extension() {
        assert_eq!(language_id(Path::new("lib/a.rb"), None), "ruby");
        assert_eq!(language_id(Path::new("a.py"), None), "py");
        assert_eq!(language_id(Path::new("LICENSE"), None), "unknown");
    }

    #[test]
    fn resolve_style_returns_none_for_unsupported() {
        assert_eq!(resolve_style("python", false).unwrap(), None);
        assert_eq!(
            resolve_style("javascript", false).unwrap(),
            Some(CommentStyle::Block)
        );
    }
}
