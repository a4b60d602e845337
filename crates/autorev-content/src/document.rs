//! Line-indexed text document

use crate::edit::{Edit, EditKind, InsertionPoint};

/// A text buffer with a line index.
///
/// Lines are separated by `\n`; a trailing newline leaves an empty last
/// line, so `"a\n"` has two lines. Line text never includes the line break,
/// and a `\r` before the break is dropped as well.
///
/// Inserted text follows the document's line ending, taken from its first
/// line break (`\n` when there is none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    source: String,
    /// Byte offset where each line starts
    line_starts: Vec<usize>,
    line_ending: &'static str,
}

impl Document {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = index_lines(&source);
        let line_ending = detect_line_ending(&source);
        Self {
            source,
            line_starts,
            line_ending,
        }
    }

    /// Full text
    pub fn text(&self) -> &str {
        &self.source
    }

    /// Text of the line at `index`, without its line break
    pub fn line(&self, index: usize) -> Option<&str> {
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map_or(self.source.len(), |next| next - 1);
        let text = &self.source[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Line containing the byte at `offset`.
    ///
    /// Offsets past the end map to the last line.
    pub fn line_of_offset(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    /// Byte offset of a position.
    ///
    /// Positions past the last line resolve to the end of the text, and
    /// columns are clamped to the line length.
    pub fn offset_of(&self, point: InsertionPoint) -> usize {
        match self.line_starts.get(point.line) {
            Some(&start) => {
                let len = self.line(point.line).map_or(0, str::len);
                start + point.column.min(len)
            }
            None => self.source.len(),
        }
    }

    /// Build the insertion edit for `text` at `point` without applying it.
    ///
    /// `text` is written with `\n` breaks, which are converted to the
    /// document's line ending. Inserting past the end of a text that lacks a
    /// final newline first terminates the last line.
    pub fn insertion(&self, kind: EditKind, point: InsertionPoint, text: String) -> Edit {
        let offset = self.offset_of(point);
        let text = match self.line_ending {
            "\n" => text,
            ending => text.replace('\n', ending),
        };
        let new_content = if offset > 0 && !self.source[..offset].ends_with('\n') {
            format!("{}{text}", self.line_ending)
        } else {
            text
        };
        Edit {
            kind,
            point,
            span: offset..offset,
            new_content,
        }
    }

    /// Apply an edit built against the current text
    pub fn apply(&mut self, edit: &Edit) {
        self.source = edit.apply(&self.source);
        self.line_starts = index_lines(&self.source);
        tracing::debug!(
            point = %edit.point,
            inserted = edit.new_content.len(),
            "Applied edit"
        );
    }
}

fn detect_line_ending(source: &str) -> &'static str {
    match source.find('\n') {
        Some(i) if source[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

fn index_lines(source: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(source.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}
