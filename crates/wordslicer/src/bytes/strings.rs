//! # String Utilities

/// Owned-buffer variant of [`String::from_utf8_lossy`].
///
/// Valid UTF-8 is moved into the result without copying.
pub fn string_from_utf8_lossy(v: Vec<u8>) -> String {
    match String::from_utf8(v) {
        Ok(string) => string,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
