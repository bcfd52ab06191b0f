use std::io::{BufRead, Write};

use wordslicer::TextTokenizer;

use crate::{
    input_output::{InputArgs, OutputArgs},
    tokenizer_args::ScanArgs,
};

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    #[command(flatten)]
    scan: ScanArgs,

    /// Print the token count of each line, rather than the tokens.
    #[arg(long)]
    count: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TokenizeArgs {
    /// Run the tokenize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer: TextTokenizer = TextTokenizer::new().with_config(self.scan.scan_config());

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            let line = line?;
            if self.count {
                writeln!(writer, "{}", tokenizer.count_tokens(&line))?;
            } else {
                writeln!(writer, "{}", tokenizer.tokenize(&line).join(" "))?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}
