//! Comment style handlers

mod block_comment;
mod line_comment;

pub use block_comment::BlockCommentHandler;
pub use line_comment::LineCommentHandler;
