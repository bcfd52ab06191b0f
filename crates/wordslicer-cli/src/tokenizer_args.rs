use wordslicer::{
    TextTokenizer,
    scanning::ScanConfig,
    vocab::{
        DEFAULT_CLS_TOKEN,
        DEFAULT_PAD_TOKEN,
        DEFAULT_SEP_TOKEN,
        DEFAULT_UNK_TOKEN,
        SpecialTokens,
    },
};

/// Scanner argument group.
#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Lowercase ASCII letters in emitted tokens.
    #[arg(long)]
    pub lowercase: bool,

    /// Treat ASCII punctuation as split points.
    #[arg(long)]
    pub split_on_punctuation: bool,

    /// Emit punctuation split points as tokens.
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Extra ASCII delimiter characters.
    #[arg(long, default_value = None)]
    pub delimiters: Option<String>,
}

impl ScanArgs {
    /// Build the scan configuration.
    pub fn scan_config(&self) -> ScanConfig {
        let config = ScanConfig::default()
            .with_lowercase(self.lowercase)
            .with_split_on_punctuation(self.split_on_punctuation)
            .with_keep_punctuation(self.keep_punctuation);
        match &self.delimiters {
            Some(delimiters) => config.add_delimiters(delimiters),
            None => config,
        }
    }
}

/// Special token argument group.
#[derive(clap::Args, Debug)]
pub struct SpecialTokenArgs {
    /// The unknown token.
    #[arg(long, default_value = DEFAULT_UNK_TOKEN)]
    pub unk_token: String,

    /// The padding token.
    #[arg(long, default_value = DEFAULT_PAD_TOKEN)]
    pub pad_token: String,

    /// The sequence-begin token.
    #[arg(long, default_value = DEFAULT_CLS_TOKEN)]
    pub cls_token: String,

    /// The separator token.
    #[arg(long, default_value = DEFAULT_SEP_TOKEN)]
    pub sep_token: String,
}

impl SpecialTokenArgs {
    /// Build the special token strings.
    pub fn special_tokens(&self) -> SpecialTokens {
        SpecialTokens::new(
            self.unk_token.as_str(),
            self.pad_token.as_str(),
            self.cls_token.as_str(),
            self.sep_token.as_str(),
        )
    }
}

/// Load a tokenizer with an attached vocabulary file.
pub fn load_tokenizer(
    config: ScanConfig,
    specials: SpecialTokens,
    vocab_path: &str,
) -> Result<TextTokenizer, Box<dyn std::error::Error>> {
    let mut tokenizer: TextTokenizer = TextTokenizer::new();
    tokenizer.configure(config, specials);
    tokenizer.load_vocabulary(vocab_path)?;

    log::info!(
        "vocabulary: {} tokens; unk={} pad={} cls={} sep={}",
        tokenizer.vocabulary_size(),
        id_or_sentinel(tokenizer.unk_id()),
        id_or_sentinel(tokenizer.pad_id()),
        id_or_sentinel(tokenizer.cls_id()),
        id_or_sentinel(tokenizer.sep_id()),
    );

    Ok(tokenizer)
}

/// Display an optional id, with `-1` for absent ids.
pub fn id_or_sentinel(id: Option<u32>) -> i64 {
    id.map_or(-1, i64::from)
}
