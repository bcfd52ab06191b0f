//! # Token Encoder

use std::sync::Arc;

use crate::{
    scanning::TextScanner,
    types::TokenType,
    vocab::UnifiedVocab,
};

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached scanner.
    fn scanner(&self) -> &TextScanner;

    /// Encode a single normalized token, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `token` - The normalized token bytes.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_token(
        &self,
        token: &[u8],
        tokens: &mut Vec<T>,
    );

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        self.scanner()
            .for_each_token(text.as_bytes(), |token| self.encode_append_token(token, tokens));
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A vector of tokens, one per scanned token.
    fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<T> {
        let mut tokens = Vec::new();
        self.encode_append(text.as_ref(), &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A vector of token vectors.
    fn encode_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|s| self.encode(s)).collect()
    }
}

/// A vocabulary lookup [`TokenEncoder<T>`].
///
/// Tokens missing from the vocabulary encode as the unknown id;
/// when the vocabulary has no unknown id, they are dropped.
#[derive(Debug, Clone)]
pub struct VocabEncoder<T: TokenType> {
    vocab: Arc<UnifiedVocab<T>>,
    scanner: TextScanner,
}

impl<T: TokenType> VocabEncoder<T> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary to encode against.
    /// * `scanner` - The scanner which splits text.
    pub fn new(
        vocab: Arc<UnifiedVocab<T>>,
        scanner: TextScanner,
    ) -> Self {
        Self { vocab, scanner }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<UnifiedVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenEncoder<T> for VocabEncoder<T> {
    fn scanner(&self) -> &TextScanner {
        &self.scanner
    }

    fn encode_append_token(
        &self,
        token: &[u8],
        tokens: &mut Vec<T>,
    ) {
        match self
            .vocab
            .table()
            .lookup_bytes(token)
            .or(self.vocab.special_ids().unk)
        {
            Some(id) => tokens.push(id),
            None => log::trace!(
                "dropping unknown token {:?}; vocabulary has no unknown id",
                String::from_utf8_lossy(token)
            ),
        }
    }
}
