//! # `wordslicer` Text Tokenizer
//!
//! A delimiter and punctuation driven text tokenizer,
//! with a vocabulary codec and fixed-length sequence formatting
//! for BERT-style model input.
//!
//! Scanning works on encoded bytes. Multi-byte UTF-8 sequences are never
//! split; only ASCII bytes are delimiters, punctuation, or lowercased.
//!
//! See:
//! * [`scanning`] to split text into tokens.
//! * [`vocab`] to load, save, or build token vocabularies.
//! * [`codec`] to encode tokens into ids, and decode ids into text.
//! * [`formatting`] to lay out fixed-length model input.
//! * [`tokenizer`] for the combined [`TextTokenizer`].
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap` implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::WSHashMap`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! This swaps all `HashMap` implementations for ``foldhash``.
//! If both "ahash" and "foldhash" are enabled, then "ahash" will win.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Encoding Model Input
//!
//! ```rust
//! use wordslicer::TextTokenizer;
//!
//! let mut tokenizer: TextTokenizer = TextTokenizer::new()
//!     .with_lowercase(true)
//!     .with_split_on_punctuation(true)
//!     .with_keep_punctuation(true);
//!
//! tokenizer.build_vocabulary(["Hello, world!", "hello there."], 1, 100)?;
//!
//! let ids = tokenizer.encode_sequence("Hello world!", 8, true);
//! assert_eq!(ids, vec![2, 4, 6, 7, 3]);
//! assert_eq!(tokenizer.decode(&ids), "[CLS] hello world ! [SEP]");
//! # Ok::<(), wordslicer::WordslicerError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod bytes;
pub mod codec;
pub mod errors;
pub mod formatting;
pub mod scanning;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use codec::{TokenDecoder, TokenEncoder};
#[doc(inline)]
pub use errors::{WSResult, WordslicerError};
#[doc(inline)]
pub use tokenizer::TextTokenizer;
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::UnifiedVocab;
