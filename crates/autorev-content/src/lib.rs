//! Revision history blocks for AutoRevision
//!
//! Locates the latest `REV.NN` entry in a source document, renders the next
//! entry (or a full default header when none exists) in the document's
//! comment style, and works out where it belongs.

pub mod date;
pub mod document;
pub mod edit;
pub mod error;
pub mod format;
pub mod generator;
pub mod handlers;
pub mod locator;

pub use date::{Stamp, format_date, this_year, today};
pub use document::Document;
pub use edit::{Edit, EditKind, InsertionPoint};
pub use error::{Error, Result};
pub use format::{CommentStyle, RevisionStyle, language_id_for_path};
pub use generator::RevisionGenerator;
pub use handlers::{BlockCommentHandler, LineCommentHandler};
pub use locator::{
    RevisionEntry, RevisionNumber, find_latest_revision_line, insertion_point, latest_revision,
    latest_revision_text, next_revision_number,
};
