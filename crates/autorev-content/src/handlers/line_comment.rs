//! Hash line-comment revision blocks (Ruby)
//!
//! Entries look like `#   REV.01 2024/05/01  BY. AB` followed by an
//! indented message line; the history ends at a bare `#` line.

use regex::Regex;
use std::sync::LazyLock;

use crate::date::Stamp;
use crate::format::{CommentStyle, RevisionStyle};
use crate::locator::RevisionNumber;

/// A bare `#`, optionally followed by one whitespace character
pub static DELIMITER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s?$").expect("valid line delimiter pattern"));

/// Handler for `#` comment revision history
#[derive(Debug, Default)]
pub struct LineCommentHandler;

impl LineCommentHandler {
    pub fn new() -> Self {
        Self
    }
}

impl RevisionStyle for LineCommentHandler {
    fn comment_style(&self) -> CommentStyle {
        CommentStyle::Line
    }

    fn is_delimiter(&self, line: &str) -> bool {
        DELIMITER_PATTERN.is_match(line)
    }

    fn first_block(&self, stamp: &Stamp) -> String {
        format!(
            "# encoding: UTF-8\n\
             #\n\
             # (c) {year} Azbil Corporation All Rights Reserved.\n\
             #\n\
             # ORIGINAL SOURCE INFORMATION\n\
             #\n\
             # REVISION HISTORY\n\
             #   REV.{number} {date}  BY. {signature}\n\
             #\n",
            year = stamp.year(),
            number = RevisionNumber::FIRST,
            date = stamp.date_text(),
            signature = stamp.signature,
        )
    }

    fn next_block(&self, number: &RevisionNumber, stamp: &Stamp) -> String {
        format!(
            "#   REV.{number} {date}  BY. {signature}\n#     {message}\n",
            date = stamp.date_text(),
            signature = stamp.signature,
            message = stamp.message,
        )
    }
}
