//! # Token Codec
//!
//! * [`TokenEncoder`] - scanned tokens to ids, with unknown-id fallback.
//! * [`TokenDecoder`] - ids to space-joined text, with padding suppressed.

mod token_decoder;
mod token_encoder;

#[doc(inline)]
pub use token_decoder::*;
#[doc(inline)]
pub use token_encoder::*;
