//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use wordslicer::vocab::{SpecialTokens, UnifiedVocab, io::load_unified_vocab_path};
//!
//! fn example() -> wordslicer::WSResult<UnifiedVocab<u32>> {
//!     load_unified_vocab_path("vocab.txt", SpecialTokens::default())
//! }
//! ```

mod line_vocab;

#[doc(inline)]
pub use line_vocab::*;
