use std::io::{BufRead, Write};

use wordslicer::TextTokenizer;

use crate::{
    input_output::{InputArgs, OutputArgs},
    tokenizer_args::{ScanArgs, SpecialTokenArgs, load_tokenizer},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Line-delimited vocabulary file.
    #[arg(long)]
    vocab: String,

    #[command(flatten)]
    scan: ScanArgs,

    #[command(flatten)]
    specials: SpecialTokenArgs,

    /// Maximum ids per encoded line.
    #[arg(long, default_value = "512")]
    max_length: usize,

    /// Do not wrap lines in the sequence-begin and separator ids.
    #[arg(long)]
    no_special_tokens: bool,

    /// Print one ``id<TAB>token`` row per id, rather than a line of ids.
    #[arg(long)]
    breakdown: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = load_tokenizer(
            self.scan.scan_config(),
            self.specials.special_tokens(),
            &self.vocab,
        )?;

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            let line = line?;
            let ids = tokenizer.encode_sequence(&line, self.max_length, !self.no_special_tokens);

            if self.breakdown {
                write_breakdown(&tokenizer, &ids, &mut writer)?;
            } else {
                let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
                writeln!(writer, "{}", ids.join(" "))?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}

/// The name of a special id, if it is one.
fn special_label(
    tokenizer: &TextTokenizer,
    id: u32,
) -> Option<&'static str> {
    let some = Some(id);
    if some == tokenizer.cls_id() {
        Some("CLS")
    } else if some == tokenizer.sep_id() {
        Some("SEP")
    } else if some == tokenizer.pad_id() {
        Some("PAD")
    } else if some == tokenizer.unk_id() {
        Some("UNK")
    } else {
        None
    }
}

/// Write one row per id; then a blank line.
fn write_breakdown(
    tokenizer: &TextTokenizer,
    ids: &[u32],
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for &id in ids {
        let token = tokenizer.token_for_id_or_invalid(id);
        match special_label(tokenizer, id) {
            Some(label) => writeln!(writer, "{id}\t{token}\t({label})")?,
            None => writeln!(writer, "{id}\t{token}")?,
        }
    }
    writeln!(writer)?;
    Ok(())
}
