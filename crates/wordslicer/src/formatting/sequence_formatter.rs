//! # Sequence Formatter

use crate::{types::TokenType, vocab::UnifiedVocab};

/// The default maximum sequence length.
pub const DEFAULT_MAX_LENGTH: usize = 512;

/// Options for [`SequenceFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceOptions {
    /// The maximum number of ids in a formatted sequence.
    pub max_length: usize,

    /// Wrap content with the begin and separator ids.
    pub add_special_tokens: bool,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            add_special_tokens: true,
        }
    }
}

impl SequenceOptions {
    /// Create new options.
    pub fn new(
        max_length: usize,
        add_special_tokens: bool,
    ) -> Self {
        Self {
            max_length,
            add_special_tokens,
        }
    }

    /// Sets the maximum sequence length.
    pub fn with_max_length(
        self,
        max_length: usize,
    ) -> Self {
        Self { max_length, ..self }
    }

    /// Sets special token wrapping.
    pub fn with_add_special_tokens(
        self,
        add_special_tokens: bool,
    ) -> Self {
        Self {
            add_special_tokens,
            ..self
        }
    }
}

/// Fixed-length model input formatter.
///
/// The result never holds more than `max_length` ids.
/// Each defined special id reserves one slot; content is truncated to what
/// remains. When `max_length` cannot hold both reserved slots, the begin id
/// is kept first, and content is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceFormatter<T: TokenType> {
    /// The sequence-begin id.
    pub begin: Option<T>,

    /// The separator id.
    pub sep: Option<T>,
}

impl<T: TokenType> SequenceFormatter<T> {
    /// Create a new formatter.
    pub fn new(
        begin: Option<T>,
        sep: Option<T>,
    ) -> Self {
        Self { begin, sep }
    }

    /// Create a formatter from a vocabulary's `cls` and `sep` ids.
    pub fn from_vocab(vocab: &UnifiedVocab<T>) -> Self {
        let ids = vocab.special_ids();
        Self::new(ids.cls, ids.sep)
    }

    /// Format content ids.
    ///
    /// ## Arguments
    /// * `content` - The encoded content ids.
    /// * `options` - The length and special token options.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, content)))]
    pub fn format(
        &self,
        content: &[T],
        options: SequenceOptions,
    ) -> Vec<T> {
        if !options.add_special_tokens {
            return truncate_ids(content, options.max_length).to_vec();
        }

        let mut budget = options.max_length;
        let begin = self.begin.filter(|_| budget > 0);
        if begin.is_some() {
            budget -= 1;
        }
        let sep = self.sep.filter(|_| budget > 0);
        if sep.is_some() {
            budget -= 1;
        }

        let content = truncate_ids(content, budget);
        let mut ids = Vec::with_capacity(content.len() + 2);
        ids.extend(begin);
        ids.extend_from_slice(content);
        ids.extend(sep);
        ids
    }
}

/// Keep at most `max_length` leading ids.
pub fn truncate_ids<T>(
    ids: &[T],
    max_length: usize,
) -> &[T] {
    &ids[..ids.len().min(max_length)]
}
