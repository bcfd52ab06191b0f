//! # Sequence Formatting
//!
//! Wraps encoded ids for fixed-length model input (BERT-style):
//! ``[begin] content... [sep]``, truncated to a maximum length.

mod sequence_formatter;

#[doc(inline)]
pub use sequence_formatter::*;
