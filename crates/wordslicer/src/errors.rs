//! # Error Types

/// Errors from wordslicer operations.
///
/// Routine data issues (unknown tokens, out-of-range ids, malformed lead bytes)
/// are never errors; they degrade to well-defined fallbacks.
#[derive(Debug, thiserror::Error)]
pub enum WordslicerError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// The operation requires an attached vocabulary.
    #[error("no vocabulary is attached")]
    NoVocabulary,

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for wordslicer operations.
pub type WSResult<T> = core::result::Result<T, WordslicerError>;
