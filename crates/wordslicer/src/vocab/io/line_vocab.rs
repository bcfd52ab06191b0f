//! # Line-Delimited Vocabulary IO
//!
//! One token per line; line order defines the id.
//! Trailing spaces, tabs, and line endings are stripped,
//! and blank lines are skipped without consuming an id.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::WSResult,
    types::TokenType,
    vocab::{SpecialTokens, TokenVocab, UnifiedVocab},
};

/// Bytes stripped from the end of each vocabulary line.
const TRAILING_WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Read a [`TokenVocab`] from a line-delimited [`BufRead`] stream.
pub fn read_line_vocab<T, R>(reader: R) -> WSResult<TokenVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut vocab = TokenVocab::default();
    for line in reader.lines() {
        let line = line?;
        let token = line.trim_end_matches(TRAILING_WHITESPACE);
        if token.is_empty() {
            continue;
        }
        vocab.push(token)?;
    }
    Ok(vocab)
}

/// Load a [`TokenVocab`] from a line-delimited vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_line_vocab_path<T, P>(path: P) -> WSResult<TokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    read_line_vocab(reader)
}

/// Load a [`UnifiedVocab`] from a line-delimited vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
/// * `specials` - the special token strings to resolve.
pub fn load_unified_vocab_path<T, P>(
    path: P,
    specials: SpecialTokens,
) -> WSResult<UnifiedVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let vocab = UnifiedVocab::init(load_line_vocab_path(path)?, specials);
    log::debug!(
        "loaded {} vocabulary tokens from {}; specials: {:?}",
        vocab.len(),
        path.display(),
        vocab.special_ids()
    );
    Ok(vocab)
}

/// Write a [`TokenVocab`] to a [`Write`] writer, one token per line, in id order.
pub fn write_line_vocab<T, W>(
    vocab: &TokenVocab<T>,
    writer: &mut W,
) -> WSResult<()>
where
    T: TokenType,
    W: Write,
{
    for token in vocab.tokens() {
        writeln!(writer, "{token}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Save a [`TokenVocab`] to a line-delimited vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_line_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &TokenVocab<T>,
    path: P,
) -> WSResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_line_vocab(vocab, &mut writer)?;
    log::debug!(
        "saved {} vocabulary tokens to {}",
        vocab.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::errors::WordslicerError;

    #[test]
    fn test_read_line_vocab() {
        type T = u32;

        let data = "[PAD]\r\n[UNK]  \n\n   \nhello\t\nworld";
        let vocab: TokenVocab<T> = read_line_vocab(Cursor::new(data)).unwrap();

        assert_eq!(vocab.tokens(), &["[PAD]", "[UNK]", "hello", "world"]);
        assert_eq!(vocab.lookup_token("hello"), Some(2));
        assert_eq!(vocab.lookup_token("world"), Some(3));
    }

    #[test]
    fn test_leading_whitespace_kept() {
        type T = u32;

        let vocab: TokenVocab<T> = read_line_vocab(Cursor::new("  indented\n")).unwrap();
        assert_eq!(vocab.tokens(), &["  indented"]);
    }

    #[test]
    fn test_write_line_vocab() {
        type T = u32;

        let vocab: TokenVocab<T> = TokenVocab::from_tokens(["a", "日本", "[SEP]"]).unwrap();
        let mut buf: Vec<u8> = Vec::new();
        write_line_vocab(&vocab, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\n日本\n[SEP]\n");
    }

    #[test]
    fn test_save_load_line_vocab() {
        type T = u32;

        let vocab: TokenVocab<T> =
            TokenVocab::from_tokens(["[PAD]", "[UNK]", "[CLS]", "[SEP]", "apple", "pear"])
                .unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.txt");

                save_line_vocab_path(&vocab, &path).expect("Failed to save vocab");
                assert_eq!(std::fs::read_to_string(&path)?.lines().count(), 6);

                let loaded: TokenVocab<T> =
                    load_line_vocab_path(&path).expect("Failed to load vocab");
                assert_eq!(&loaded, &vocab);

                let unified: UnifiedVocab<T> =
                    load_unified_vocab_path(&path, SpecialTokens::default())
                        .expect("Failed to load vocab");
                assert_eq!(unified.special_ids().sep, Some(3));

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        type T = u32;

        let result: WSResult<TokenVocab<T>> =
            load_line_vocab_path("/nonexistent/wordslicer/vocab.txt");
        assert!(matches!(result, Err(WordslicerError::Io(_))));
    }
}
