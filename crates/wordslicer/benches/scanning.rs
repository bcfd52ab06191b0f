#![allow(missing_docs)]

use std::sync::Arc;

use divan::{Bencher, black_box, counter::BytesCount};
use wordslicer::{
    TextTokenizer,
    TokenEncoder,
    UnifiedVocab,
    codec::VocabEncoder,
    scanning::{ScanConfig, TextScanner},
    vocab::{VocabBuilderOptions, build_vocab_from_samples},
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static ENGLISH_CORPUS: &str = "\
The quick brown fox jumps over the lazy dog. It's a beautiful day, and I'll be \
taking my 3 dogs for a walk! Don't forget: the temperature is 72 degrees (roughly), \
so bring water; maybe a hat... or two?\n\t\"Well,\" she said, \"that's that.\"\n";

static DIVERSE_CORPUS: &str = "\
caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}\u{4e16}\u{754c}, Geburtstag 2024: Alles Gute! \
emoji: \u{1f600}\u{1f680}\u{1f4a1} -- \u{041f}\u{0440}\u{0438}\u{0432}\u{0435}\u{0442} \
\u{043c}\u{0438}\u{0440}! $$$!!!...--- mixed: hello\u{00a0}world\u{2003}wide\n";

fn english_text() -> String {
    ENGLISH_CORPUS.repeat(200)
}

fn diverse_text() -> String {
    DIVERSE_CORPUS.repeat(200)
}

fn bert_config() -> ScanConfig {
    ScanConfig::default()
        .with_lowercase(true)
        .with_split_on_punctuation(true)
        .with_keep_punctuation(true)
}

fn build_encoder(text: &str) -> VocabEncoder<u32> {
    let scanner = TextScanner::new(bert_config());
    let vocab: UnifiedVocab<u32> =
        build_vocab_from_samples(scanner, text.lines(), VocabBuilderOptions::default())
            .unwrap();
    VocabEncoder::new(Arc::new(vocab), scanner)
}

mod english {
    use super::*;

    #[divan::bench]
    fn count_whitespace(bencher: Bencher) {
        let text = english_text();
        let scanner = TextScanner::default();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| scanner.count_tokens(black_box(&text)));
    }

    #[divan::bench]
    fn tokenize_whitespace(bencher: Bencher) {
        let text = english_text();
        let scanner = TextScanner::default();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| scanner.tokenize(black_box(&text)));
    }

    #[divan::bench]
    fn tokenize_bert(bencher: Bencher) {
        let text = english_text();
        let scanner = TextScanner::new(bert_config());
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| scanner.tokenize(black_box(&text)));
    }

    #[divan::bench]
    fn encode_bert(bencher: Bencher) {
        let text = english_text();
        let encoder = build_encoder(&text);
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| encoder.encode(black_box(&text)));
    }

    #[divan::bench]
    fn encode_sequence(bencher: Bencher) {
        let text = english_text();
        let mut tokenizer: TextTokenizer = TextTokenizer::new().with_config(bert_config());
        tokenizer
            .build_vocabulary(text.lines(), 1, 50_000)
            .unwrap();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| tokenizer.encode_sequence(black_box(&text), 512, true));
    }
}

mod diverse {
    use super::*;

    #[divan::bench]
    fn count_whitespace(bencher: Bencher) {
        let text = diverse_text();
        let scanner = TextScanner::default();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| scanner.count_tokens(black_box(&text)));
    }

    #[divan::bench]
    fn tokenize_bert(bencher: Bencher) {
        let text = diverse_text();
        let scanner = TextScanner::new(bert_config());
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| scanner.tokenize(black_box(&text)));
    }

    #[divan::bench]
    fn encode_bert(bencher: Bencher) {
        let text = diverse_text();
        let encoder = build_encoder(&text);
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| encoder.encode(black_box(&text)));
    }
}
