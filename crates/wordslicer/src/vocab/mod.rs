//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! The primary user-oriented vocabulary is [`UnifiedVocab`], which contains:
//! * `table` - a [`TokenVocab`] ``{ String <-> T }`` table,
//! * `specials` - the [`SpecialTokens`] strings,
//! * `special_ids` - the [`SpecialIds`] they resolve to in the table.
//!
//! Vocabularies are loaded from line-delimited files via [`io`],
//! or built from a corpus via [`VocabBuilder`].

pub mod io;

mod special_tokens;
mod token_vocab;
mod unified_vocab;
mod vocab_builder;

#[doc(inline)]
pub use special_tokens::*;
#[doc(inline)]
pub use token_vocab::*;
#[doc(inline)]
pub use unified_vocab::*;
#[doc(inline)]
pub use vocab_builder::*;
