//! Error types for autorev-content

/// Result type for autorev-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a revision block
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document's language has no revision comment style
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The line picked as the latest entry has no `REV.NN` on it.
    ///
    /// The locator selects lines by that very pattern, so seeing this means
    /// the document changed under us or the patterns disagree.
    #[error("No revision number found on line: {text:?}")]
    MalformedRevisionLine { text: String },
}

impl Error {
    pub fn unsupported(language_id: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(language_id.into())
    }
}
