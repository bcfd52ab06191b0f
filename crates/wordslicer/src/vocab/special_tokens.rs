//! # Special Tokens
//!
//! Four reserved tokens have structural roles:
//! * `unk` - substituted for tokens missing from the vocabulary;
//! * `pad` - padding, suppressed on decode;
//! * `cls` - the sequence-begin marker;
//! * `sep` - the sequence-separator marker.
//!
//! [`SpecialTokens`] names the strings; [`SpecialIds`] holds what they resolve
//! to in a given [`TokenVocab`]. A special token missing from the vocabulary
//! resolves to `None`, which is a valid state.

use crate::{types::TokenType, vocab::TokenVocab};

/// The default unknown token.
pub const DEFAULT_UNK_TOKEN: &str = "[UNK]";
/// The default padding token.
pub const DEFAULT_PAD_TOKEN: &str = "[PAD]";
/// The default sequence-begin token.
pub const DEFAULT_CLS_TOKEN: &str = "[CLS]";
/// The default separator token.
pub const DEFAULT_SEP_TOKEN: &str = "[SEP]";

/// The strings recognized as special tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecialTokens {
    /// The unknown token.
    pub unk: String,

    /// The padding token.
    pub pad: String,

    /// The sequence-begin token.
    pub cls: String,

    /// The separator token.
    pub sep: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self::new(
            DEFAULT_UNK_TOKEN,
            DEFAULT_PAD_TOKEN,
            DEFAULT_CLS_TOKEN,
            DEFAULT_SEP_TOKEN,
        )
    }
}

impl SpecialTokens {
    /// Create a new set of special tokens.
    pub fn new<S: Into<String>>(
        unk: S,
        pad: S,
        cls: S,
        sep: S,
    ) -> Self {
        Self {
            unk: unk.into(),
            pad: pad.into(),
            cls: cls.into(),
            sep: sep.into(),
        }
    }

    /// Set the unknown token.
    pub fn with_unk<S: Into<String>>(
        self,
        unk: S,
    ) -> Self {
        Self {
            unk: unk.into(),
            ..self
        }
    }

    /// Set the padding token.
    pub fn with_pad<S: Into<String>>(
        self,
        pad: S,
    ) -> Self {
        Self {
            pad: pad.into(),
            ..self
        }
    }

    /// Set the sequence-begin token.
    pub fn with_cls<S: Into<String>>(
        self,
        cls: S,
    ) -> Self {
        Self {
            cls: cls.into(),
            ..self
        }
    }

    /// Set the separator token.
    pub fn with_sep<S: Into<String>>(
        self,
        sep: S,
    ) -> Self {
        Self {
            sep: sep.into(),
            ..self
        }
    }

    /// The special tokens in reserved-id order: pad, unk, cls, sep.
    pub fn reserved_order(&self) -> [&str; 4] {
        [&self.pad, &self.unk, &self.cls, &self.sep].map(String::as_str)
    }
}

/// The resolved ids of the [`SpecialTokens`] in a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecialIds<T: TokenType> {
    /// The unknown id.
    pub unk: Option<T>,

    /// The padding id.
    pub pad: Option<T>,

    /// The sequence-begin id.
    pub cls: Option<T>,

    /// The separator id.
    pub sep: Option<T>,
}

impl<T: TokenType> SpecialIds<T> {
    /// Resolve the special tokens against a table.
    pub fn resolve(
        specials: &SpecialTokens,
        vocab: &TokenVocab<T>,
    ) -> Self {
        Self {
            unk: vocab.lookup_token(&specials.unk),
            pad: vocab.lookup_token(&specials.pad),
            cls: vocab.lookup_token(&specials.cls),
            sep: vocab.lookup_token(&specials.sep),
        }
    }
}
