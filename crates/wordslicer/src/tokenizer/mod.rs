//! # Tokenizer
//!
//! [`TextTokenizer`] combines:
//! * a [`crate::scanning::ScanConfig`] for splitting text,
//! * the [`crate::vocab::SpecialTokens`] strings,
//! * an optional attached [`crate::vocab::UnifiedVocab`].
//!
//! Without a vocabulary, a tokenizer still scans and counts tokens.

mod text_tokenizer;

#[doc(inline)]
pub use text_tokenizer::*;
