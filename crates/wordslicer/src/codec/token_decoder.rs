//! # Token Decoder

use std::sync::Arc;

use crate::{types::TokenType, vocab::UnifiedVocab};

/// The separator placed between decoded tokens.
pub const DECODE_SEPARATOR: &str = " ";

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens, appending to a string buffer.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target buffer.
    fn decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    );

    /// Decodes tokens into a string.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        let mut buf = String::new();
        self.decode_append(tokens, &mut buf);
        buf
    }

    /// Decodes a batch of tokens.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        batch.iter().map(|tokens| self.decode(tokens)).collect()
    }
}

/// A vocabulary lookup [`TokenDecoder<T>`].
///
/// Resolved tokens are joined with a single space.
/// Ids outside the vocabulary, and the padding token, are skipped;
/// other special tokens decode literally.
#[derive(Debug, Clone)]
pub struct VocabDecoder<T: TokenType> {
    vocab: Arc<UnifiedVocab<T>>,
}

impl<T: TokenType> VocabDecoder<T> {
    /// Create a new decoder.
    pub fn new(vocab: Arc<UnifiedVocab<T>>) -> Self {
        Self { vocab }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<UnifiedVocab<T>> {
        &self.vocab
    }

    /// Iterate over the decoded tokens, in order.
    pub fn decode_tokens<'a>(
        &'a self,
        tokens: &'a [T],
    ) -> impl Iterator<Item = &'a str> + 'a {
        let pad = self.vocab.specials().pad.as_str();
        tokens
            .iter()
            .filter_map(|&t| self.vocab.lookup_id(t))
            .filter(move |&token| token != pad)
    }
}

impl<T: TokenType> TokenDecoder<T> for VocabDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    ) {
        for (idx, token) in self.decode_tokens(tokens).enumerate() {
            if idx > 0 {
                buf.push_str(DECODE_SEPARATOR);
            }
            buf.push_str(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{SpecialTokens, TokenVocab};

    fn decoder() -> VocabDecoder<u32> {
        let table =
            TokenVocab::from_tokens(["[PAD]", "[UNK]", "[CLS]", "[SEP]", "hello", "world"])
                .unwrap();
        VocabDecoder::new(UnifiedVocab::init(table, SpecialTokens::default()).into())
    }

    #[test]
    fn test_decode() {
        let decoder = decoder();

        assert_eq!(decoder.decode(&[2, 4, 5, 3]), "[CLS] hello world [SEP]");
        assert_eq!(decoder.decode(&[4, 1, 5]), "hello [UNK] world");
        assert_eq!(decoder.decode(&[]), "");
    }

    #[test]
    fn test_decode_skips_pad_and_out_of_range() {
        let decoder = decoder();

        assert_eq!(decoder.decode(&[0, 4, 0, 0, 5, 0]), "hello world");
        assert_eq!(decoder.decode(&[6, 4, 100, 5, u32::MAX]), "hello world");
        assert_eq!(decoder.decode(&[0, 0]), "");
    }

    #[test]
    fn test_decode_batch() {
        let decoder = decoder();

        let a: &[u32] = &[4];
        let b: &[u32] = &[5, 0, 4];
        assert_eq!(decoder.decode_batch(&[a, b]), vec!["hello", "world hello"]);

        let mut buf = "> ".to_string();
        decoder.decode_append(&[4], &mut buf);
        assert_eq!(buf, "> hello");
    }
}
