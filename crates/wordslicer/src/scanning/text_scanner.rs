//! # Text Scanner
//!
//! A single left-to-right pass over encoded bytes, with two cursors:
//! `start` (the pending token's first byte) and `i` (the lookahead).
//!
//! * Multi-byte sequences are skipped whole; they are never split points.
//! * An ASCII split byte flushes the pending run `[start, i)` as a word,
//!   then consumes the maximal run of split bytes following it.
//!   With `keep_punctuation`, every punctuation byte in that run is emitted
//!   exactly once as its own token; delimiters are consumed silently.
//! * Whatever remains after the pass is the final word.

use core::ops::Range;

use crate::{
    bytes::{char_span_end, is_ascii_byte, string_from_utf8_lossy},
    scanning::ScanConfig,
};

/// Span Label/Range Reference for [`TextScanner`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef {
    /// A run of non-splitting bytes.
    Word(Range<usize>),

    /// A single retained punctuation byte.
    Punct(Range<usize>),
}

impl SpanRef {
    /// The byte range of the span.
    pub fn range(&self) -> &Range<usize> {
        match self {
            SpanRef::Word(range) => range,
            SpanRef::Punct(range) => range,
        }
    }
}

impl From<SpanRef> for Range<usize> {
    fn from(span: SpanRef) -> Self {
        match span {
            SpanRef::Word(range) => range,
            SpanRef::Punct(range) => range,
        }
    }
}

/// Delimiter and punctuation driven text scanner.
///
/// Holds only its [`ScanConfig`]; scans share no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextScanner {
    config: ScanConfig,
}

impl From<ScanConfig> for TextScanner {
    fn from(config: ScanConfig) -> Self {
        Self::new(config)
    }
}

impl TextScanner {
    /// Create a new scanner.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Get the scan configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Visit every token span of `bytes`, in order.
    ///
    /// This is the scan; every other method is a view of it.
    pub fn for_each_span<F>(
        &self,
        bytes: &[u8],
        mut f: F,
    ) where
        F: FnMut(SpanRef),
    {
        let config = &self.config;
        let len = bytes.len();

        let mut start = 0;
        let mut i = 0;
        while i < len {
            let b = bytes[i];

            if !is_ascii_byte(b) {
                i = char_span_end(bytes, i);
                continue;
            }

            if !config.splits_at(b) {
                i += 1;
                continue;
            }

            if i > start {
                f(SpanRef::Word(start..i));
            }

            while i < len && config.splits_at(bytes[i]) {
                if config.emits(bytes[i]) {
                    f(SpanRef::Punct(i..i + 1));
                }
                i += 1;
            }
            start = i;
        }

        if start < len {
            f(SpanRef::Word(start..len));
        }
    }

    /// Collect the token spans of `bytes`.
    pub fn split_spans(
        &self,
        bytes: &[u8],
    ) -> Vec<SpanRef> {
        let mut spans = Vec::new();
        self.for_each_span(bytes, |span| spans.push(span));
        spans
    }

    /// Visit every normalized token of `bytes`, in order.
    ///
    /// The token slice is only valid for the duration of the callback.
    pub fn for_each_token<F>(
        &self,
        bytes: &[u8],
        mut f: F,
    ) where
        F: FnMut(&[u8]),
    {
        let normalizer = self.config.normalizer();
        let mut buf = Vec::new();
        self.for_each_span(bytes, |span| {
            buf.clear();
            normalizer.normalize_append(&bytes[Range::from(span)], &mut buf);
            f(&buf);
        });
    }

    /// Split encoded bytes into normalized tokens.
    pub fn tokenize_bytes(
        &self,
        bytes: &[u8],
    ) -> Vec<Vec<u8>> {
        let mut tokens = Vec::new();
        self.for_each_token(bytes, |token| tokens.push(token.to_vec()));
        tokens
    }

    /// Split text into normalized tokens.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.tokenize_bytes(text.as_bytes())
            .into_iter()
            .map(string_from_utf8_lossy)
            .collect()
    }

    /// Count the tokens of encoded bytes, without materializing them.
    pub fn count_tokens_bytes(
        &self,
        bytes: &[u8],
    ) -> usize {
        let mut count = 0;
        self.for_each_span(bytes, |_| count += 1);
        count
    }

    /// Count the tokens of text, without materializing them.
    pub fn count_tokens(
        &self,
        text: &str,
    ) -> usize {
        self.count_tokens_bytes(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::scanning::{DEFAULT_DELIMITERS, DelimiterSet};

    fn punct_config() -> ScanConfig {
        ScanConfig::default()
            .with_split_on_punctuation(true)
            .with_keep_punctuation(true)
    }

    fn tokenize(
        config: ScanConfig,
        text: &str,
    ) -> Vec<String> {
        TextScanner::new(config).tokenize(text)
    }

    #[test]
    fn test_default_config() {
        assert_eq!(
            tokenize(ScanConfig::default(), "Hello, world!"),
            vec!["Hello,", "world!"]
        );
        assert_eq!(
            tokenize(ScanConfig::default(), "  The quick\tbrown\n\nfox  "),
            vec!["The", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            tokenize(punct_config(), "Hello, world!"),
            vec!["Hello", ",", "world", "!"]
        );

        // split, but drop the punctuation.
        let config = ScanConfig::default().with_split_on_punctuation(true);
        assert_eq!(tokenize(config, "Hello, world!"), vec!["Hello", "world"]);
        assert_eq!(tokenize(config, "a.b.c"), vec!["a", "b", "c"]);

        // keeping punctuation without splitting on it is a no-op.
        let config = ScanConfig::default().with_keep_punctuation(true);
        assert_eq!(tokenize(config, "Hello, world!"), vec!["Hello,", "world!"]);
    }

    #[test]
    fn test_punctuation_runs() {
        assert_eq!(
            tokenize(punct_config(), "wait...what?!"),
            vec!["wait", ".", ".", ".", "what", "?", "!"]
        );
        assert_eq!(
            tokenize(punct_config(), "a , b"),
            vec!["a", ",", "b"]
        );
        assert_eq!(
            tokenize(punct_config(), "(x) - [y]"),
            vec!["(", "x", ")", "-", "[", "y", "]"]
        );
        assert_eq!(tokenize(punct_config(), "!!"), vec!["!", "!"]);
    }

    #[test]
    fn test_punctuation_delimiters() {
        // Delimiters which are punctuation are emitted when keeping punctuation,
        // even without punctuation splitting.
        let config = ScanConfig::default()
            .with_keep_punctuation(true)
            .add_delimiter(b'-');
        assert_eq!(tokenize(config, "state-of-the-art"), vec![
            "state", "-", "of", "-", "the", "-", "art"
        ]);
        assert_eq!(tokenize(config, "--"), vec!["-", "-"]);

        let config = config.with_keep_punctuation(false);
        assert_eq!(tokenize(config, "state-of-the-art"), vec![
            "state", "of", "the", "art"
        ]);
        assert!(tokenize(config, "- -").is_empty());
    }

    #[test]
    fn test_edge_cases() {
        assert!(tokenize(ScanConfig::default(), "").is_empty());
        assert!(tokenize(ScanConfig::default(), " \t\r\n\x0b\x0c").is_empty());
        assert!(tokenize(punct_config(), "   ").is_empty());
        assert_eq!(tokenize(ScanConfig::default(), "word"), vec!["word"]);
        assert_eq!(
            tokenize(ScanConfig::default().with_lowercase(true), "WORD"),
            vec!["word"]
        );

        // no delimiters at all.
        let config = ScanConfig::default().with_delimiters(DelimiterSet::empty());
        assert_eq!(tokenize(config, "a b\tc"), vec!["a b\tc"]);
    }

    #[test]
    fn test_lowercase() {
        let config = punct_config().with_lowercase(true);
        assert_eq!(
            tokenize(config, "Machine LEARNING is Awesome."),
            vec!["machine", "learning", "is", "awesome", "."]
        );
    }

    #[test]
    fn test_multibyte() {
        let config = punct_config().with_lowercase(true);
        assert_eq!(
            tokenize(config, "Café,Crème brûlée!"),
            vec!["café", ",", "crème", "brûlée", "!"]
        );
        assert_eq!(
            tokenize(config, "日本語 テキスト。"),
            vec!["日本語", "テキスト。"]
        );
        assert_eq!(tokenize(config, "🦀Rust🦀"), vec!["🦀rust🦀"]);
    }

    #[test]
    fn test_malformed_bytes() {
        let scanner = TextScanner::default();

        assert_eq!(
            scanner.tokenize_bytes(&[0xFF, b' ', 0x80]),
            vec![vec![0xFF], vec![0x80]]
        );

        // A truncated sequence at the end of input.
        assert_eq!(scanner.tokenize_bytes(&[b'a', 0xE6]), vec![vec![b'a', 0xE6]]);

        // A lead byte's span is skipped without inspection.
        assert_eq!(
            scanner.tokenize_bytes(&[0xE6, b' ', b'x', b' ', b'y']),
            vec![vec![0xE6, b' ', b'x'], vec![b'y']]
        );
    }

    #[test]
    fn test_split_spans() {
        let scanner = TextScanner::new(punct_config());
        assert_eq!(scanner.split_spans(b"hi, yo"), vec![
            SpanRef::Word(0..2),
            SpanRef::Punct(2..3),
            SpanRef::Word(4..6),
        ]);
        assert_eq!(SpanRef::Punct(2..3).range(), &(2..3));
    }

    #[test]
    fn test_count_tokens() {
        let scanner = TextScanner::new(punct_config());
        assert_eq!(scanner.count_tokens("Hello, world!"), 4);
        assert_eq!(scanner.count_tokens("wait...what?!"), 7);
        assert_eq!(scanner.count_tokens(""), 0);
        assert_eq!(TextScanner::default().count_tokens("Hello, world!"), 2);
    }

    fn whitespace_split_count(text: &str) -> usize {
        text.split(|c: char| c.is_ascii() && DEFAULT_DELIMITERS.contains(&(c as u8)))
            .filter(|s| !s.is_empty())
            .count()
    }

    proptest! {
        #[test]
        fn prop_whitespace_split_count(text in "[a-zA-Z,.!?é日🦀 \t\n\r\x0b\x0c]{0,64}") {
            let scanner = TextScanner::default();
            prop_assert_eq!(scanner.count_tokens(&text), whitespace_split_count(&text));
            prop_assert_eq!(scanner.tokenize(&text).len(), whitespace_split_count(&text));
        }

        #[test]
        fn prop_count_matches_tokenize(
            text in "\\PC{0,64}",
            lowercase in any::<bool>(),
            keep in any::<bool>(),
            split in any::<bool>()
        ) {
            let config = ScanConfig::default()
                .with_lowercase(lowercase)
                .with_keep_punctuation(keep)
                .with_split_on_punctuation(split);
            let scanner = TextScanner::new(config);
            prop_assert_eq!(scanner.count_tokens(&text), scanner.tokenize(&text).len());
        }

        #[test]
        fn prop_idempotent(text in "\\PC{0,64}") {
            let scanner = TextScanner::new(punct_config().with_lowercase(true));
            prop_assert_eq!(scanner.tokenize(&text), scanner.tokenize(&text));
        }

        #[test]
        fn prop_spans_respect_char_boundaries(text in "\\PC{0,64}") {
            let scanner = TextScanner::new(punct_config());
            for span in scanner.split_spans(text.as_bytes()) {
                let range = span.range();
                prop_assert!(range.start < range.end);
                prop_assert!(text.is_char_boundary(range.start));
                prop_assert!(text.is_char_boundary(range.end));
            }
        }
    }
}
