//! # Corpus Vocabulary Builder
//!
//! Counts scanner tokens over a corpus, then lays out a [`UnifiedVocab`]:
//! * the special tokens first, at the lowest ids (pad, unk, cls, sep);
//! * then tokens with count ``>= min_frequency``, by descending count,
//!   until the table holds `max_size` entries.
//!
//! Tokens with equal counts keep their first-seen corpus order.

use crate::{
    errors::WSResult,
    scanning::TextScanner,
    types::{TokenType, WSHashMap, hash_map_with_capacity},
    vocab::{SpecialTokens, TokenVocab, UnifiedVocab},
};

/// The default minimum token frequency.
pub const DEFAULT_MIN_FREQUENCY: usize = 1;

/// The default maximum vocabulary size.
pub const DEFAULT_MAX_VOCAB_SIZE: usize = 50_000;

/// Options for [`VocabBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabBuilderOptions {
    /// Tokens seen fewer times than this are dropped.
    pub min_frequency: usize,

    /// The maximum number of entries, including the special tokens.
    pub max_size: usize,

    /// The special tokens reserved at the lowest ids.
    pub specials: SpecialTokens,
}

impl Default for VocabBuilderOptions {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            max_size: DEFAULT_MAX_VOCAB_SIZE,
            specials: SpecialTokens::default(),
        }
    }
}

impl VocabBuilderOptions {
    /// Sets the minimum token frequency.
    pub fn with_min_frequency(
        self,
        min_frequency: usize,
    ) -> Self {
        Self {
            min_frequency,
            ..self
        }
    }

    /// Sets the maximum vocabulary size.
    pub fn with_max_size(
        self,
        max_size: usize,
    ) -> Self {
        Self { max_size, ..self }
    }

    /// Sets the special tokens.
    pub fn with_specials(
        self,
        specials: SpecialTokens,
    ) -> Self {
        Self { specials, ..self }
    }

    /// Initializes a [`VocabBuilder`] from these options.
    pub fn init(
        self,
        scanner: TextScanner,
    ) -> VocabBuilder {
        VocabBuilder::new(self, scanner)
    }
}

/// A token's corpus count, and the order it was first seen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TokenCount {
    count: usize,
    first_seen: usize,
}

/// Corpus token counter and vocabulary builder.
pub struct VocabBuilder {
    /// The config options.
    pub options: VocabBuilderOptions,

    /// The scanner producing tokens.
    pub scanner: TextScanner,

    counts: WSHashMap<String, TokenCount>,
}

impl VocabBuilder {
    /// Create a new builder.
    pub fn new(
        options: VocabBuilderOptions,
        scanner: TextScanner,
    ) -> Self {
        Self {
            options,
            scanner,
            counts: hash_map_with_capacity(1024),
        }
    }

    /// The number of distinct tokens seen so far.
    pub fn distinct_tokens(&self) -> usize {
        self.counts.len()
    }

    /// The count of a token seen so far.
    pub fn token_count(
        &self,
        token: &str,
    ) -> usize {
        self.counts.get(token).map_or(0, |c| c.count)
    }

    /// Update token counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let counts = &mut self.counts;
        self.scanner
            .for_each_token(text.as_ref().as_bytes(), |token| {
                let token = String::from_utf8_lossy(token);
                if let Some(entry) = counts.get_mut(token.as_ref()) {
                    entry.count += 1;
                } else {
                    let first_seen = counts.len();
                    counts.insert(token.into_owned(), TokenCount {
                        count: 1,
                        first_seen,
                    });
                }
            });
    }

    /// Update token counts inplace from a sample iterator.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// The tokens meeting `min_frequency`, by descending count, ties in first-seen order.
    fn sorted_candidates(&self) -> Vec<(&str, TokenCount)> {
        let mut candidates: Vec<(&str, TokenCount)> = self
            .counts
            .iter()
            .filter(|(_, c)| c.count >= self.options.min_frequency)
            .map(|(token, &c)| (token.as_str(), c))
            .collect();
        candidates.sort_unstable_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        candidates
    }

    /// Build the [`UnifiedVocab`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn build<T: TokenType>(&self) -> WSResult<UnifiedVocab<T>> {
        let max_size = self.options.max_size;
        let specials = self.options.specials.clone();

        let candidates = self.sorted_candidates();
        log::info!(
            "Building vocabulary: {} of {} distinct tokens meet min_frequency={}",
            candidates.len(),
            self.counts.len(),
            self.options.min_frequency
        );

        let mut table: TokenVocab<T> =
            TokenVocab::with_capacity(max_size.min(candidates.len() + 4));
        for token in specials.reserved_order() {
            table.insert(token)?;
        }

        for (token, _) in candidates {
            if table.len() >= max_size {
                break;
            }
            if !table.contains(token) {
                table.push(token)?;
            }
        }

        log::info!("Finished vocabulary: {} tokens", table.len());
        Ok(UnifiedVocab::init(table, specials))
    }
}

/// Build a [`UnifiedVocab`] from a corpus.
///
/// ## Arguments
/// * `scanner` - the scanner which splits the corpus.
/// * `samples` - the corpus texts.
/// * `options` - frequency, size, and special token options.
pub fn build_vocab_from_samples<T, I>(
    scanner: TextScanner,
    samples: I,
    options: VocabBuilderOptions,
) -> WSResult<UnifiedVocab<T>>
where
    T: TokenType,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut builder = options.init(scanner);
    builder.update_from_samples(samples);
    builder.build()
}
