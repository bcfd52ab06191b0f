//! # Token Normalizer

use crate::bytes::{char_span_end, is_ascii_byte, string_from_utf8_lossy, to_ascii_lower};

/// Per-token text normalization.
///
/// With lowercasing enabled, ASCII bytes are lowercased individually and
/// multi-byte sequences are copied verbatim, bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalizer {
    /// Lowercase ASCII letters.
    pub lowercase: bool,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }

    /// Normalize `span`, appending the result to `buf`.
    pub fn normalize_append(
        &self,
        span: &[u8],
        buf: &mut Vec<u8>,
    ) {
        if !self.lowercase {
            buf.extend_from_slice(span);
            return;
        }

        buf.reserve(span.len());
        let mut i = 0;
        while i < span.len() {
            let b = span[i];
            if is_ascii_byte(b) {
                buf.push(to_ascii_lower(b));
                i += 1;
            } else {
                let end = char_span_end(span, i);
                buf.extend_from_slice(&span[i..end]);
                i = end;
            }
        }
    }

    /// Normalize a byte span.
    pub fn normalize_bytes(
        &self,
        span: &[u8],
    ) -> Vec<u8> {
        let mut buf = Vec::with_capacity(span.len());
        self.normalize_append(span, &mut buf);
        buf
    }

    /// Normalize a token.
    pub fn normalize<S: AsRef<str>>(
        &self,
        token: S,
    ) -> String {
        string_from_utf8_lossy(self.normalize_bytes(token.as_ref().as_bytes()))
    }
}
