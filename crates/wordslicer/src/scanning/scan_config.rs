//! # Scan Configuration

use core::fmt::{Debug, Formatter};

use crate::bytes::{Normalizer, is_ascii_byte, is_ascii_punct};

/// The default delimiter bytes: space, tab, newline, carriage return, form feed, vertical tab.
pub const DEFAULT_DELIMITERS: &[u8] = b" \t\n\r\x0c\x0b";

/// A set of single-byte ASCII delimiters.
///
/// Non-ASCII bytes can never be split points; inserting one is a no-op.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelimiterSet {
    bits: u128,
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::from_bytes(DEFAULT_DELIMITERS)
    }
}

impl Debug for DelimiterSet {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|b| b as char))
            .finish()
    }
}

impl DelimiterSet {
    /// An empty delimiter set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Build a set from the given bytes.
    ///
    /// Non-ASCII bytes are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::empty();
        for &b in bytes {
            set.insert(b);
        }
        set
    }

    /// Add a delimiter.
    ///
    /// ## Returns
    /// `false` if `b` is not ASCII, and was not added.
    pub fn insert(
        &mut self,
        b: u8,
    ) -> bool {
        if !is_ascii_byte(b) {
            log::warn!("ignoring non-ASCII delimiter byte {b:#04x}");
            return false;
        }
        self.bits |= 1u128 << b;
        true
    }

    /// Remove a delimiter.
    pub fn remove(
        &mut self,
        b: u8,
    ) {
        if is_ascii_byte(b) {
            self.bits &= !(1u128 << b);
        }
    }

    /// Is `b` a delimiter?
    #[inline(always)]
    pub const fn contains(
        &self,
        b: u8,
    ) -> bool {
        is_ascii_byte(b) && (self.bits >> b) & 1 == 1
    }

    /// The number of delimiters.
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Is the set empty?
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over the delimiters in byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..128).filter(|&b| self.contains(b))
    }
}

/// Scanner configuration.
///
/// A plain `Copy` value; every scan takes the configuration it is given,
/// so changing a configuration only affects future scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanConfig {
    /// Lowercase ASCII letters in emitted tokens.
    pub lowercase: bool,

    /// Emit punctuation bytes which trigger a split as their own tokens.
    pub keep_punctuation: bool,

    /// Treat ASCII punctuation as split points.
    pub split_on_punctuation: bool,

    /// Bytes which are always split points.
    pub delimiters: DelimiterSet,
}

impl ScanConfig {
    /// Set lowercasing.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Set punctuation retention.
    pub fn with_keep_punctuation(
        self,
        keep_punctuation: bool,
    ) -> Self {
        Self {
            keep_punctuation,
            ..self
        }
    }

    /// Set punctuation splitting.
    pub fn with_split_on_punctuation(
        self,
        split_on_punctuation: bool,
    ) -> Self {
        Self {
            split_on_punctuation,
            ..self
        }
    }

    /// Replace the delimiter set.
    pub fn with_delimiters(
        self,
        delimiters: DelimiterSet,
    ) -> Self {
        Self { delimiters, ..self }
    }

    /// Add a delimiter byte.
    pub fn add_delimiter(
        mut self,
        b: u8,
    ) -> Self {
        self.delimiters.insert(b);
        self
    }

    /// Add every byte of `delimiters` as a delimiter.
    pub fn add_delimiters<S: AsRef<[u8]>>(
        mut self,
        delimiters: S,
    ) -> Self {
        for &b in delimiters.as_ref() {
            self.delimiters.insert(b);
        }
        self
    }

    /// Remove a delimiter byte.
    pub fn remove_delimiter(
        mut self,
        b: u8,
    ) -> Self {
        self.delimiters.remove(b);
        self
    }

    /// The [`Normalizer`] for emitted tokens.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.lowercase)
    }

    /// Is `b` a split point?
    ///
    /// Delimiters always split; punctuation splits only when enabled.
    #[inline(always)]
    pub fn splits_at(
        &self,
        b: u8,
    ) -> bool {
        self.delimiters.contains(b) || (self.split_on_punctuation && is_ascii_punct(b))
    }

    /// Is `b` emitted as its own token when it is consumed as a split point?
    #[inline(always)]
    pub fn emits(
        &self,
        b: u8,
    ) -> bool {
        self.keep_punctuation && is_ascii_punct(b)
    }
}
