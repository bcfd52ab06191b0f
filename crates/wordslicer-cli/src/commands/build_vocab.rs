use std::io::BufRead;

use wordslicer::{
    UnifiedVocab,
    scanning::TextScanner,
    vocab::{
        DEFAULT_MAX_VOCAB_SIZE,
        DEFAULT_MIN_FREQUENCY,
        VocabBuilderOptions,
        io::write_line_vocab,
    },
};

use crate::{
    input_output::{OutputArgs, open_reader},
    tokenizer_args::{ScanArgs, SpecialTokenArgs},
};

/// Args for the build-vocab command.
#[derive(clap::Args, Debug)]
pub struct BuildVocabArgs {
    /// Corpus files, one sample per line; "-" may be used to indicate stdin.
    #[arg(default_value = "-")]
    files: Vec<String>,

    #[command(flatten)]
    scan: ScanArgs,

    #[command(flatten)]
    specials: SpecialTokenArgs,

    /// Tokens seen fewer times are dropped.
    #[arg(long, default_value_t = DEFAULT_MIN_FREQUENCY)]
    min_frequency: usize,

    /// Max vocab size, including special tokens.
    #[arg(long, default_value_t = DEFAULT_MAX_VOCAB_SIZE)]
    max_size: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl BuildVocabArgs {
    /// Run the build-vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut builder = VocabBuilderOptions::default()
            .with_min_frequency(self.min_frequency)
            .with_max_size(self.max_size)
            .with_specials(self.specials.special_tokens())
            .init(TextScanner::new(self.scan.scan_config()));

        log::info!("Reading corpus:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            let reader = open_reader(Some(path))?;
            for line in reader.lines() {
                builder.update_from_text(line?);
            }
        }

        let vocab: UnifiedVocab<u32> = builder.build()?;
        log::info!("Vocabulary Size: {}", vocab.len());

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_line_vocab(vocab.table(), &mut writer)?;

        Ok(())
    }
}
