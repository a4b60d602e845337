//! Revision block generation
//!
//! Ties the locator and a comment style together: one scan of the
//! document, one edit out.

use crate::date::Stamp;
use crate::document::Document;
use crate::edit::{Edit, EditKind, InsertionPoint};
use crate::error::Result;
use crate::format::{CommentStyle, RevisionStyle};
use crate::locator::{self, RevisionNumber};

/// Produces the revision edit for a document in one comment style
pub struct RevisionGenerator {
    handler: Box<dyn RevisionStyle>,
}

impl RevisionGenerator {
    pub fn new(style: CommentStyle) -> Self {
        Self {
            handler: style.handler(),
        }
    }

    /// Generator for an editor language id
    pub fn for_language(language_id: &str) -> Result<Self> {
        CommentStyle::from_language_id(language_id).map(Self::new)
    }

    pub fn style(&self) -> CommentStyle {
        self.handler.comment_style()
    }

    /// Build the edit that adds the next revision entry to `document`.
    ///
    /// Documents without any entry get the full default block at the very
    /// start; otherwise the next numbered entry goes at the insertion point
    /// below the latest one.
    pub fn generate(&self, document: &Document, stamp: &Stamp) -> Result<Edit> {
        let Some((_, line_text)) = locator::latest_revision_text(document) else {
            tracing::debug!(style = ?self.style(), "No revision history, inserting default block");
            let text = self.handler.first_block(stamp);
            return Ok(document.insertion(EditKind::FirstRevision, InsertionPoint::START, text));
        };

        let number = locator::next_revision_number(line_text)?;
        let point = locator::insertion_point(document, self.handler.as_ref());
        tracing::debug!(%number, %point, "Inserting next revision entry");

        let text = self.handler.next_block(&number, stamp);
        Ok(document.insertion(
            EditKind::NextRevision {
                number: number.to_string(),
            },
            point,
            text,
        ))
    }

    /// Generate and apply in one step, returning the applied edit
    pub fn stamp(&self, document: &mut Document, stamp: &Stamp) -> Result<Edit> {
        let edit = self.generate(document, stamp)?;
        document.apply(&edit);
        Ok(edit)
    }

    /// Number the next generated entry would carry
    pub fn next_number(&self, document: &Document) -> Result<RevisionNumber> {
        match locator::latest_revision_text(document) {
            Some((_, line_text)) => locator::next_revision_number(line_text),
            None => Ok(RevisionNumber::FIRST),
        }
    }
}
