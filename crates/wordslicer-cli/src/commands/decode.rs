use std::io::{BufRead, Write};

use crate::{
    input_output::{InputArgs, OutputArgs},
    tokenizer_args::{SpecialTokenArgs, load_tokenizer},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// Line-delimited vocabulary file.
    #[arg(long)]
    vocab: String,

    #[command(flatten)]
    specials: SpecialTokenArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = load_tokenizer(
            Default::default(),
            self.specials.special_tokens(),
            &self.vocab,
        )?;

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            let ids = parse_ids(&line?)?;
            writeln!(writer, "{}", tokenizer.decode(&ids))?;
        }
        writer.flush()?;

        Ok(())
    }
}

/// Parse a line of whitespace-separated ids.
fn parse_ids(line: &str) -> Result<Vec<u32>, std::num::ParseIntError> {
    line.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        assert_eq!(parse_ids("2 4\t5  3").unwrap(), vec![2, 4, 5, 3]);
        assert!(parse_ids("").unwrap().is_empty());
        assert!(parse_ids("2 x 3").is_err());
        assert!(parse_ids("-1").is_err());
    }
}
