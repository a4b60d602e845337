//! Asterisk block-comment revision blocks (JavaScript)

use regex::Regex;
use std::sync::LazyLock;

use crate::date::Stamp;
use crate::format::{CommentStyle, RevisionStyle};
use crate::locator::RevisionNumber;

/// ` * =====` rule line closing the header block
pub static DELIMITER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s\*\s={5,}$").expect("valid block delimiter pattern"));

const RULE: &str = "=================================================================";

/// Handler for `/* ... */` revision history
#[derive(Debug, Default)]
pub struct BlockCommentHandler;

impl BlockCommentHandler {
    pub fn new() -> Self {
        Self
    }
}

impl RevisionStyle for BlockCommentHandler {
    fn comment_style(&self) -> CommentStyle {
        CommentStyle::Block
    }

    fn is_delimiter(&self, line: &str) -> bool {
        DELIMITER_PATTERN.is_match(line)
    }

    fn first_block(&self, stamp: &Stamp) -> String {
        format!(
            "/*jslint sloppy: true , browser: true */\n\
             /*global AZBIL, Highcharts, jQuery, $ */\n\
             /* {RULE}\n \
             * NO.83XXXXXX\n \
             *\n \
             * (c) {year} Azbil Corporation All Rights Reserved.\n \
             *\n \
             * REVISION HISTORY\n \
             *   REV.{number} {date} BY. {signature}\n \
             * {RULE}\n \
             */\n",
            year = stamp.year(),
            number = RevisionNumber::FIRST,
            date = stamp.date_text(),
            signature = stamp.signature,
        )
    }

    fn next_block(&self, number: &RevisionNumber, stamp: &Stamp) -> String {
        format!(
            " *   REV.{number} {date} BY. {signature}\n *       {message}\n",
            date = stamp.date_text(),
            signature = stamp.signature,
            message = stamp.message,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn stamp() -> Stamp {
        Stamp::new(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(), "EF", "add chart")
    }

    #[test]
    fn delimiter_matches_rule_line() {
        let handler = BlockCommentHandler::new();
        assert!(handler.is_delimiter(" * ====="));
        assert!(handler.is_delimiter(&format!(" * {RULE}")));
        assert!(!handler.is_delimiter(" * ===="));
        assert!(!handler.is_delimiter("* ====="));
        assert!(!handler.is_delimiter(" * ===== "));
        assert!(!handler.is_delimiter("/* ====="));
    }

    #[test]
    fn first_block_layout() {
        let expected = "\
/*jslint sloppy: true , browser: true */
/*global AZBIL, Highcharts, jQuery, $ */
/* =================================================================
 * NO.83XXXXXX
 *
 * (c) 2025 Azbil Corporation All Rights Reserved.
 *
 * REVISION HISTORY
 *   REV.00 2025/11/03 BY. EF
 * =================================================================
 */
";
        assert_eq!(BlockCommentHandler::new().first_block(&stamp()), expected);
    }

    #[test]
    fn next_block_layout() {
        let block = BlockCommentHandler::new().next_block(&RevisionNumber::new(12), &stamp());
        assert_eq!(block, " *   REV.12 2025/11/03 BY. EF\n *       add chart\n");
    }

    #[test]
    fn first_block_rule_lines_are_delimiters() {
        let handler = BlockCommentHandler::new();
        let block = handler.first_block(&stamp());
        let rules = block.lines().filter(|l| handler.is_delimiter(l)).count();
        assert_eq!(rules, 1);
    }
}
