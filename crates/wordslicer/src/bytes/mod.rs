//! # Byte Level Support
//!
//! Everything in this crate operates directly over encoded bytes.
//! No Unicode tables are consulted:
//! * [`byte_class`] - lead byte spans, ASCII punctuation, ASCII case.
//! * [`Normalizer`] - per-token normalization that never inspects multi-byte sequences.

pub mod byte_class;
mod normalizer;
mod strings;

#[doc(inline)]
pub use byte_class::*;
#[doc(inline)]
pub use normalizer::*;
#[doc(inline)]
pub use strings::*;
