//! # Unified Vocabulary

use crate::{
    types::TokenType,
    vocab::{SpecialIds, SpecialTokens, TokenVocab},
};

/// A [`TokenVocab`] together with its resolved [`SpecialIds`].
///
/// Immutable once built; the special ids always agree with the table.
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedVocab<T: TokenType> {
    table: TokenVocab<T>,
    specials: SpecialTokens,
    special_ids: SpecialIds<T>,
}

impl<T: TokenType> AsRef<UnifiedVocab<T>> for UnifiedVocab<T> {
    fn as_ref(&self) -> &UnifiedVocab<T> {
        self
    }
}

impl<T: TokenType> UnifiedVocab<T> {
    /// Build a vocabulary, resolving the special ids against the table.
    pub fn init(
        table: TokenVocab<T>,
        specials: SpecialTokens,
    ) -> Self {
        let special_ids = SpecialIds::resolve(&specials, &table);
        Self {
            table,
            specials,
            special_ids,
        }
    }

    /// Replace the special token strings, re-resolving the special ids.
    pub fn with_specials(
        self,
        specials: SpecialTokens,
    ) -> Self {
        Self::init(self.table, specials)
    }

    /// The token table.
    pub fn table(&self) -> &TokenVocab<T> {
        &self.table
    }

    /// The special token strings.
    pub fn specials(&self) -> &SpecialTokens {
        &self.specials
    }

    /// The resolved special ids.
    pub fn special_ids(&self) -> &SpecialIds<T> {
        &self.special_ids
    }

    /// The number of ids in the vocabulary.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Return the id for the token, if any.
    pub fn lookup_token(
        &self,
        token: &str,
    ) -> Option<T> {
        self.table.lookup_token(token)
    }

    /// Return the token for the id, if it is in range.
    pub fn lookup_id(
        &self,
        id: T,
    ) -> Option<&str> {
        self.table.lookup_id(id)
    }

    /// Is `id` the padding id?
    pub fn is_pad(
        &self,
        id: T,
    ) -> bool {
        self.special_ids.pad == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        type T = u32;

        let table: TokenVocab<T> =
            TokenVocab::from_tokens(["[PAD]", "[UNK]", "[CLS]", "[SEP]", "hello", "world"])
                .unwrap();
        let vocab = UnifiedVocab::init(table, SpecialTokens::default());

        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.special_ids().pad, Some(0));
        assert_eq!(vocab.special_ids().unk, Some(1));
        assert_eq!(vocab.special_ids().cls, Some(2));
        assert_eq!(vocab.special_ids().sep, Some(3));
        assert!(vocab.is_pad(0));
        assert!(!vocab.is_pad(1));

        assert_eq!(vocab.lookup_token("world"), Some(5));
        assert_eq!(vocab.lookup_id(4), Some("hello"));
        assert_eq!(vocab.specials(), &SpecialTokens::default());
        assert_eq!(vocab.table().len(), 6);
    }

    #[test]
    fn test_with_specials() {
        type T = u32;

        let table: TokenVocab<T> = TokenVocab::from_tokens(["<pad>", "[PAD]", "x"]).unwrap();
        let vocab = UnifiedVocab::init(table, SpecialTokens::default());
        assert_eq!(vocab.special_ids().pad, Some(1));
        assert_eq!(vocab.special_ids().unk, None);

        let vocab = vocab.with_specials(SpecialTokens::default().with_pad("<pad>"));
        assert_eq!(vocab.special_ids().pad, Some(0));
        assert!(vocab.is_pad(0));
        assert!(!vocab.is_pad(1));
    }
}
