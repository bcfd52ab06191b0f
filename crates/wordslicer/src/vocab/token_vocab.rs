//! # Token Table ``{ String <-> T }``

use crate::{
    errors::{WSResult, WordslicerError},
    types::{TokenType, WSHashMap, hash_map_with_capacity},
};

/// A bidirectional table between token text and a dense id range.
///
/// Ids are `0..len`, assigned in insertion order.
/// Every id has exactly one token; `lookup_token(lookup_id(id))` resolves
/// to the first id that was assigned to that token text.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    /// Map of ``{ String -> T }``.
    token_map: WSHashMap<String, T>,

    /// Tokens indexed by id.
    tokens: Vec<String>,
}

impl<T: TokenType> Default for TokenVocab<T> {
    fn default() -> Self {
        Self {
            token_map: WSHashMap::default(),
            tokens: Vec::new(),
        }
    }
}

impl<T: TokenType> TokenVocab<T> {
    /// Create an empty table with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            token_map: hash_map_with_capacity(capacity),
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Build a table from tokens in id order.
    ///
    /// Repeated tokens still consume an id; see [`Self::push`].
    pub fn from_tokens<I, S>(tokens: I) -> WSResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        for token in tokens {
            vocab.push(token)?;
        }
        Ok(vocab)
    }

    /// The number of ids in the table.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The id the next pushed token would receive.
    fn next_id(&self) -> WSResult<T> {
        let size = self.tokens.len();
        T::from_usize(size).ok_or(WordslicerError::VocabSizeOverflow { size: size + 1 })
    }

    /// Append a token, assigning it the next id.
    ///
    /// A repeated token still consumes an id (keeping ids aligned with
    /// their source order), but lookups resolve to its first id.
    ///
    /// ## Returns
    /// The assigned id.
    pub fn push<S: Into<String>>(
        &mut self,
        token: S,
    ) -> WSResult<T> {
        let token = token.into();
        let id = self.next_id()?;
        if self.token_map.contains_key(&token) {
            log::warn!("duplicate vocabulary token {token:?} at id {id}");
        } else {
            self.token_map.insert(token.clone(), id);
        }
        self.tokens.push(token);
        Ok(id)
    }

    /// Insert a token if it is absent.
    ///
    /// ## Returns
    /// The existing or newly assigned id.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        token: S,
    ) -> WSResult<T> {
        let token = token.as_ref();
        match self.lookup_token(token) {
            Some(id) => Ok(id),
            None => self.push(token),
        }
    }

    /// Does the table contain `token`?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_map.contains_key(token)
    }

    /// Return the id for the token, if any.
    pub fn lookup_token(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_map.get(token).copied()
    }

    /// Return the id for an encoded token, if any.
    ///
    /// Bytes which are not valid UTF-8 are never in the table.
    pub fn lookup_bytes(
        &self,
        token: &[u8],
    ) -> Option<T> {
        core::str::from_utf8(token)
            .ok()
            .and_then(|token| self.lookup_token(token))
    }

    /// Return the token for the id, if it is in range.
    pub fn lookup_id(
        &self,
        id: T,
    ) -> Option<&str> {
        id.to_usize()
            .and_then(|idx| self.tokens.get(idx))
            .map(String::as_str)
    }

    /// The tokens, in id order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate over ``(id, token)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter_map(|(idx, token)| T::from_usize(idx).map(|id| (id, token.as_str())))
    }
}
