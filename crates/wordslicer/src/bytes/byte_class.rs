//! # Byte Classification
//!
//! Classification never looks past a single byte:
//! * the high bits of a lead byte give the span of its encoded character;
//! * ASCII bytes are tested for punctuation and mapped to lower case.
//!
//! Malformed lead bytes (stray continuation bytes, `0xF8..=0xFF`) are
//! classified as single bytes rather than failing.

/// Does `b` have its high bit clear?
#[inline(always)]
pub const fn is_ascii_byte(b: u8) -> bool {
    b & 0x80 == 0
}

/// Is `b` the lead byte of a 2, 3, or 4 byte encoded character?
#[inline(always)]
pub const fn is_lead_byte(b: u8) -> bool {
    lead_byte_span(b) > 1
}

/// The byte length of the character whose encoding starts with `b`.
///
/// Returns `1` for ASCII bytes and for any byte which does not match a
/// recognized lead byte pattern.
#[inline(always)]
pub const fn lead_byte_span(b: u8) -> usize {
    if b & 0x80 == 0 {
        1
    } else if b & 0xE0 == 0xC0 {
        2
    } else if b & 0xF0 == 0xE0 {
        3
    } else if b & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// Is `b` ASCII punctuation in the "C" locale?
///
/// This is the printable, non-alphanumeric, non-space ASCII range.
#[inline(always)]
pub const fn is_ascii_punct(b: u8) -> bool {
    b.is_ascii_punctuation()
}

/// Map an ASCII upper case letter to lower case; all other bytes pass through.
#[inline(always)]
pub const fn to_ascii_lower(b: u8) -> u8 {
    b.to_ascii_lowercase()
}

/// The end of the character span starting at `offset`, clamped to `len`.
#[inline(always)]
pub fn char_span_end(
    bytes: &[u8],
    offset: usize,
) -> usize {
    let span = lead_byte_span(bytes[offset]);
    (offset + span).min(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_byte_span() {
        assert_eq!(lead_byte_span(b'a'), 1);
        assert_eq!(lead_byte_span(0x00), 1);
        assert_eq!(lead_byte_span(0x7F), 1);

        assert_eq!(lead_byte_span(0xC3), 2);
        assert_eq!(lead_byte_span(0xE6), 3);
        assert_eq!(lead_byte_span(0xF0), 4);

        // continuation bytes and invalid leads.
        assert_eq!(lead_byte_span(0x80), 1);
        assert_eq!(lead_byte_span(0xBF), 1);
        assert_eq!(lead_byte_span(0xF8), 1);
        assert_eq!(lead_byte_span(0xFF), 1);
    }

    #[test]
    fn test_is_lead_byte() {
        assert!(!is_lead_byte(b'Z'));
        assert!(!is_lead_byte(0x85));
        assert!(is_lead_byte(0xC2));
        assert!(is_lead_byte(0xE2));
        assert!(is_lead_byte(0xF4));

        assert!(is_ascii_byte(b'~'));
        assert!(!is_ascii_byte(0xC2));
    }

    #[test]
    fn test_spans_match_encoded_chars() {
        for c in ['a', 'é', 'ß', '日', '€', '🦀', '\u{10FFFF}'] {
            let mut buf = [0u8; 4];
            let encoded = c.encode_utf8(&mut buf);
            assert_eq!(lead_byte_span(encoded.as_bytes()[0]), c.len_utf8(), "{c:?}");
        }
    }

    #[test]
    fn test_is_ascii_punct() {
        let punct: Vec<u8> = (0u8..=255).filter(|&b| is_ascii_punct(b)).collect();
        assert_eq!(punct, b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~".to_vec());
    }

    #[test]
    fn test_to_ascii_lower() {
        assert_eq!(to_ascii_lower(b'A'), b'a');
        assert_eq!(to_ascii_lower(b'z'), b'z');
        assert_eq!(to_ascii_lower(b'!'), b'!');
        assert_eq!(to_ascii_lower(0xC3), 0xC3);
    }

    #[test]
    fn test_char_span_end() {
        let bytes = "a日".as_bytes();
        assert_eq!(char_span_end(bytes, 0), 1);
        assert_eq!(char_span_end(bytes, 1), 4);

        // truncated sequence.
        let bytes = &"日".as_bytes()[..2];
        assert_eq!(char_span_end(bytes, 0), 2);
    }
}
