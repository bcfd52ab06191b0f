//! # Text Tokenizer

use std::{path::Path, sync::Arc};

use crate::{
    codec::{TokenDecoder, TokenEncoder, VocabDecoder, VocabEncoder},
    errors::{WSResult, WordslicerError},
    formatting::{SequenceFormatter, SequenceOptions, truncate_ids},
    scanning::{ScanConfig, TextScanner},
    types::TokenType,
    vocab::{
        SpecialTokens,
        UnifiedVocab,
        VocabBuilderOptions,
        build_vocab_from_samples,
        io::{load_unified_vocab_path, save_line_vocab_path},
    },
};

/// The token returned by [`TextTokenizer::token_for_id_or_invalid`] for unresolvable ids.
pub const INVALID_TOKEN: &str = "[INVALID]";

/// Scanner, vocabulary, codec, and sequence formatting in one place.
///
/// Read-only methods take `&self` and share no mutable state, so a fully
/// configured tokenizer may be used from many threads at once.
/// Loading or building a vocabulary takes `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct TextTokenizer<T: TokenType = u32> {
    config: ScanConfig,
    specials: SpecialTokens,
    vocab: Option<Arc<UnifiedVocab<T>>>,
}

impl<T: TokenType> TextTokenizer<T> {
    /// Create a tokenizer with the default configuration and no vocabulary.
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
            specials: SpecialTokens::default(),
            vocab: None,
        }
    }

    /// Replace the scan configuration and special token strings.
    pub fn configure(
        &mut self,
        config: ScanConfig,
        specials: SpecialTokens,
    ) {
        self.config = config;
        self.set_special_tokens(specials);
    }

    /// Get the scan configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Replace the scan configuration; it governs future scans only.
    pub fn set_config(
        &mut self,
        config: ScanConfig,
    ) {
        self.config = config;
    }

    /// Replace the scan configuration.
    pub fn with_config(
        mut self,
        config: ScanConfig,
    ) -> Self {
        self.set_config(config);
        self
    }

    /// Set lowercasing.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        let config = self.config.with_lowercase(lowercase);
        self.with_config(config)
    }

    /// Set punctuation retention.
    pub fn with_keep_punctuation(
        self,
        keep_punctuation: bool,
    ) -> Self {
        let config = self.config.with_keep_punctuation(keep_punctuation);
        self.with_config(config)
    }

    /// Set punctuation splitting.
    pub fn with_split_on_punctuation(
        self,
        split_on_punctuation: bool,
    ) -> Self {
        let config = self.config.with_split_on_punctuation(split_on_punctuation);
        self.with_config(config)
    }

    /// Add a delimiter byte.
    pub fn add_delimiter(
        self,
        b: u8,
    ) -> Self {
        let config = self.config.add_delimiter(b);
        self.with_config(config)
    }

    /// Add every byte of `delimiters` as a delimiter.
    pub fn add_delimiters<S: AsRef<[u8]>>(
        self,
        delimiters: S,
    ) -> Self {
        let config = self.config.add_delimiters(delimiters);
        self.with_config(config)
    }

    /// Get the special token strings.
    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.specials
    }

    /// Replace the special token strings.
    ///
    /// An attached vocabulary has its special ids re-resolved.
    pub fn set_special_tokens(
        &mut self,
        specials: SpecialTokens,
    ) {
        if let Some(vocab) = self.vocab.take() {
            let vocab = Arc::unwrap_or_clone(vocab).with_specials(specials.clone());
            self.vocab = Some(Arc::new(vocab));
        }
        self.specials = specials;
    }

    /// Replace the special token strings.
    pub fn with_special_tokens(
        mut self,
        specials: SpecialTokens,
    ) -> Self {
        self.set_special_tokens(specials);
        self
    }

    /// A scanner for the current configuration.
    pub fn scanner(&self) -> TextScanner {
        TextScanner::new(self.config)
    }

    /// Split text into normalized tokens.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.scanner().tokenize(text)
    }

    /// Split encoded bytes into normalized tokens.
    pub fn tokenize_bytes(
        &self,
        bytes: &[u8],
    ) -> Vec<Vec<u8>> {
        self.scanner().tokenize_bytes(bytes)
    }

    /// Tokenize a batch of texts.
    pub fn tokenize_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<String>> {
        let scanner = self.scanner();
        batch.iter().map(|s| scanner.tokenize(s.as_ref())).collect()
    }

    /// Count the tokens of text, without materializing them.
    pub fn count_tokens(
        &self,
        text: &str,
    ) -> usize {
        self.scanner().count_tokens(text)
    }

    /// Tokenize with the default configuration.
    pub fn simple_split(text: &str) -> Vec<String> {
        TextScanner::default().tokenize(text)
    }

    /// Attach a vocabulary, resolving this tokenizer's special tokens against it.
    pub fn set_vocabulary(
        &mut self,
        vocab: UnifiedVocab<T>,
    ) {
        self.vocab = Some(Arc::new(vocab.with_specials(self.specials.clone())));
    }

    /// Attach a vocabulary.
    pub fn with_vocabulary(
        mut self,
        vocab: UnifiedVocab<T>,
    ) -> Self {
        self.set_vocabulary(vocab);
        self
    }

    /// Get the attached vocabulary.
    pub fn vocabulary(&self) -> Option<&Arc<UnifiedVocab<T>>> {
        self.vocab.as_ref()
    }

    /// Is a vocabulary attached?
    pub fn has_vocabulary(&self) -> bool {
        self.vocab.is_some()
    }

    /// Load a line-delimited vocabulary file, replacing any attached vocabulary.
    ///
    /// On failure the attached vocabulary is left unchanged.
    pub fn load_vocabulary<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> WSResult<()> {
        let vocab = load_unified_vocab_path(path, self.specials.clone())?;
        self.vocab = Some(Arc::new(vocab));
        Ok(())
    }

    /// Build a vocabulary from a corpus with the current configuration,
    /// replacing any attached vocabulary.
    ///
    /// ## Arguments
    /// * `corpus` - the corpus texts.
    /// * `min_frequency` - tokens seen fewer times are dropped.
    /// * `max_size` - the maximum number of entries, including specials.
    pub fn build_vocabulary<I>(
        &mut self,
        corpus: I,
        min_frequency: usize,
        max_size: usize,
    ) -> WSResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let options = VocabBuilderOptions::default()
            .with_min_frequency(min_frequency)
            .with_max_size(max_size)
            .with_specials(self.specials.clone());
        let vocab = build_vocab_from_samples(self.scanner(), corpus, options)?;
        self.vocab = Some(Arc::new(vocab));
        Ok(self)
    }

    /// Save the attached vocabulary to a line-delimited file.
    pub fn save_vocabulary<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> WSResult<()> {
        let vocab = self.vocab.as_ref().ok_or(WordslicerError::NoVocabulary)?;
        save_line_vocab_path(vocab.table(), path)
    }

    /// An encoder for the attached vocabulary.
    pub fn encoder(&self) -> Option<VocabEncoder<T>> {
        self.vocab
            .as_ref()
            .map(|vocab| VocabEncoder::new(vocab.clone(), self.scanner()))
    }

    /// A decoder for the attached vocabulary.
    pub fn decoder(&self) -> Option<VocabDecoder<T>> {
        self.vocab.as_ref().map(|vocab| VocabDecoder::new(vocab.clone()))
    }

    /// Encode text into ids.
    ///
    /// Without a vocabulary, each token's ordinal position (``0, 1, 2, ...``)
    /// stands in for its id. These placeholders are only comparable within
    /// a single call, and do not decode; see [`Self::try_encode`].
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        match self.encoder() {
            Some(encoder) => encoder.encode(text),
            None => (0..self.count_tokens(text))
                .map_while(T::from_usize)
                .collect(),
        }
    }

    /// Encode text into ids, requiring a vocabulary.
    pub fn try_encode(
        &self,
        text: &str,
    ) -> WSResult<Vec<T>> {
        self.encoder()
            .map(|encoder| encoder.encode(text))
            .ok_or(WordslicerError::NoVocabulary)
    }

    /// Encode a batch of texts.
    pub fn encode_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|s| self.encode(s.as_ref())).collect()
    }

    /// Decode ids into space-joined text.
    ///
    /// Returns an empty string without a vocabulary.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> String {
        self.decoder()
            .map(|decoder| decoder.decode(ids))
            .unwrap_or_default()
    }

    /// Encode text as fixed-length model input.
    ///
    /// ## Arguments
    /// * `text` - the text to encode.
    /// * `max_length` - the maximum number of ids.
    /// * `add_special_tokens` - wrap content in the begin and separator ids.
    pub fn encode_sequence(
        &self,
        text: &str,
        max_length: usize,
        add_special_tokens: bool,
    ) -> Vec<T> {
        self.encode_sequence_with(text, SequenceOptions::new(max_length, add_special_tokens))
    }

    /// Encode text as fixed-length model input.
    pub fn encode_sequence_with(
        &self,
        text: &str,
        options: SequenceOptions,
    ) -> Vec<T> {
        let ids = self.encode(text);
        match &self.vocab {
            Some(vocab) => SequenceFormatter::from_vocab(vocab).format(&ids, options),
            None => truncate_ids(&ids, options.max_length).to_vec(),
        }
    }

    /// The number of ids in the attached vocabulary; `0` without one.
    pub fn vocabulary_size(&self) -> usize {
        self.vocab.as_ref().map_or(0, |vocab| vocab.len())
    }

    /// The token for an id, if a vocabulary is attached and the id is in range.
    pub fn token_for_id(
        &self,
        id: T,
    ) -> Option<&str> {
        self.vocab.as_ref().and_then(|vocab| vocab.lookup_id(id))
    }

    /// The token for an id, or [`INVALID_TOKEN`].
    pub fn token_for_id_or_invalid(
        &self,
        id: T,
    ) -> &str {
        self.token_for_id(id).unwrap_or(INVALID_TOKEN)
    }

    /// The unknown id, if defined.
    pub fn unk_id(&self) -> Option<T> {
        self.vocab.as_ref().and_then(|vocab| vocab.special_ids().unk)
    }

    /// The padding id, if defined.
    pub fn pad_id(&self) -> Option<T> {
        self.vocab.as_ref().and_then(|vocab| vocab.special_ids().pad)
    }

    /// The sequence-begin id, if defined.
    pub fn cls_id(&self) -> Option<T> {
        self.vocab.as_ref().and_then(|vocab| vocab.special_ids().cls)
    }

    /// The separator id, if defined.
    pub fn sep_id(&self) -> Option<T> {
        self.vocab.as_ref().and_then(|vocab| vocab.special_ids().sep)
    }
}
