//! Locating the latest revision entry and the next insertion point
//!
//! A revision entry is `REV.` followed by two digits and, later on the same
//! line, a `YYYY/MM/DD` date. The latest entry is simply the last match by
//! position.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::document::Document;
use crate::edit::InsertionPoint;
use crate::error::{Error, Result};
use crate::format::RevisionStyle;

/// Pattern matching a whole revision entry
pub static REVISION_ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"REV\.([0-9]{2}).*([0-9]{4}/[0-9]{2}/[0-9]{2})").expect("valid revision entry pattern")
});

/// Pattern capturing the revision number of an entry line
pub static REVISION_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"REV\.([0-9]{2})").expect("valid revision number pattern"));

/// Number of lines below the latest entry searched for a delimiter
pub const DELIMITER_SCAN_LINES: usize = 10;

/// Line offset used when no delimiter turns up within the scan window
pub const FALLBACK_OFFSET: usize = 2;

/// A revision number, rendered at least two digits wide.
///
/// Numbers past 99 keep growing (`100`, `101`, ...) rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevisionNumber(u32);

impl RevisionNumber {
    pub const FIRST: Self = Self(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Parse the number following the first `REV.` on a line
    pub fn from_line(line: &str) -> Option<Self> {
        let digits = REVISION_NUMBER_PATTERN.captures(line)?.get(1)?.as_str();
        digits.parse().ok().map(Self)
    }
}

impl fmt::Display for RevisionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// The latest revision entry found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionEntry {
    /// 0-based line holding the start of the entry
    pub line: usize,
    pub number: RevisionNumber,
    /// The entry's `YYYY/MM/DD` date as written
    pub date: String,
}

/// Find the line of the last revision entry in `document`
pub fn find_latest_revision_line(document: &Document) -> Option<usize> {
    let last = REVISION_ENTRY_PATTERN.find_iter(document.text()).last()?;
    let line = document.line_of_offset(last.start());
    tracing::debug!(line, offset = last.start(), "Found latest revision entry");
    Some(line)
}

/// Line index and text of the last revision entry in `document`
pub fn latest_revision_text(document: &Document) -> Option<(usize, &str)> {
    let line = find_latest_revision_line(document)?;
    Some((line, document.line(line)?))
}

/// Find the last revision entry and decode it
pub fn latest_revision(document: &Document) -> Option<RevisionEntry> {
    let caps = REVISION_ENTRY_PATTERN.captures_iter(document.text()).last()?;
    let whole = caps.get(0)?;
    let number = caps.get(1)?.as_str().parse().ok().map(RevisionNumber)?;
    Some(RevisionEntry {
        line: document.line_of_offset(whole.start()),
        number,
        date: caps.get(2)?.as_str().to_string(),
    })
}

/// Number following the entry on `line_text`.
///
/// The line is expected to be one the locator selected; a line without
/// `REV.NN` is reported as [`Error::MalformedRevisionLine`].
pub fn next_revision_number(line_text: &str) -> Result<RevisionNumber> {
    RevisionNumber::from_line(line_text)
        .map(|n| n.next())
        .ok_or_else(|| Error::MalformedRevisionLine {
            text: line_text.to_string(),
        })
}

/// Where the next block for `style` goes in `document`.
///
/// Without history this is the document start. Otherwise the first
/// delimiter line within [`DELIMITER_SCAN_LINES`] lines below the latest
/// entry, falling back to [`FALLBACK_OFFSET`] lines below it.
pub fn insertion_point(document: &Document, style: &dyn RevisionStyle) -> InsertionPoint {
    let Some(latest) = find_latest_revision_line(document) else {
        return InsertionPoint::START;
    };

    for line_no in latest + 1..=latest + DELIMITER_SCAN_LINES {
        let Some(line) = document.line(line_no) else {
            break;
        };
        if style.is_delimiter(line) {
            tracing::debug!(line_no, "Found delimiter line");
            return InsertionPoint::line_start(line_no);
        }
    }

    // FIXME: the fallback assumes a one-line message under the entry
    tracing::debug!(latest, "No delimiter near latest entry, using fallback offset");
    InsertionPoint::line_start(latest + FALLBACK_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_number_renders_two_digits() {
        assert_eq!(RevisionNumber::new(0).to_string(), "00");
        assert_eq!(RevisionNumber::new(9).to_string(), "09");
        assert_eq!(RevisionNumber::new(42).to_string(), "42");
    }

    #[test]
    fn revision_number_grows_past_ninety_nine() {
        assert_eq!(RevisionNumber::new(99).next().to_string(), "100");
    }

    #[test]
    fn from_line_reads_first_two_digits() {
        assert_eq!(
            RevisionNumber::from_line("#   REV.07 2024/01/01  BY. AB"),
            Some(RevisionNumber::new(7))
        );
        assert_eq!(RevisionNumber::from_line("REV.123"), Some(RevisionNumber::new(12)));
        assert_eq!(RevisionNumber::from_line("REV.7"), None);
    }

    #[test]
    fn next_revision_number_rejects_line_without_entry() {
        let err = next_revision_number("# nothing here").unwrap_err();
        assert!(matches!(err, Error::MalformedRevisionLine { .. }));
    }

    #[test]
    fn entry_requires_date_on_same_line() {
        let doc = Document::new("# REV.01\n# 2024/01/01\n");
        assert_eq!(find_latest_revision_line(&doc), None);
    }

    #[test]
    fn entry_on_first_line_is_found() {
        let doc = Document::new("#   REV.00 2024/01/01  BY. AB\n");
        assert_eq!(find_latest_revision_line(&doc), Some(0));
    }

    #[test]
    fn latest_revision_text_returns_entry_line() {
        let doc = Document::new("x\r\n#   REV.02 2021/03/04  BY. B\r\n#\r\n");
        assert_eq!(
            latest_revision_text(&doc),
            Some((1, "#   REV.02 2021/03/04  BY. B"))
        );
        assert_eq!(latest_revision_text(&Document::new("x\n")), None);
    }

    #[test]
    fn latest_revision_decodes_number_and_date() {
        let doc = Document::new("x\n#   REV.00 2020/02/02  BY. A\n#   REV.05 2021/03/04  BY. B\n");
        let entry = latest_revision(&doc).unwrap();
        assert_eq!(entry.line, 2);
        assert_eq!(entry.number, RevisionNumber::new(5));
        assert_eq!(entry.date, "2021/03/04");
    }
}
