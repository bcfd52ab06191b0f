mod build_vocab;
mod decode;
mod encode;
mod tokenize;

/// Subcommands for wordslicer.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Split lines of text into tokens.
    Tokenize(tokenize::TokenizeArgs),

    /// Encode lines of text into ids.
    Encode(encode::EncodeArgs),

    /// Decode lines of ids into text.
    Decode(decode::DecodeArgs),

    /// Build a vocabulary from a corpus.
    BuildVocab(build_vocab::BuildVocabArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Tokenize(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::BuildVocab(cmd) => cmd.run(),
        }
    }
}
