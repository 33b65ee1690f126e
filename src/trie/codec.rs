//! Key codecs.
//!
//! A [`PathCodec`] translates the keys a caller hands to the trie into the
//! token paths the trie stores, and renders token paths back into keys. Every
//! codec must satisfy the round-trip law: for every valid key `k`,
//! `key_from_tokens(&tokens_from_key(k))` equals `k`.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::{Result, TrieError};

/// Translation between external keys and token paths.
pub trait PathCodec {
    /// One step of a path.
    type Token: Clone + Eq + Hash + Ord;
    /// Borrowed key form accepted by lookups, e.g. `str`.
    type Key: ?Sized;
    /// Owned key form produced when keys are rendered, e.g. `String`.
    type Owned: Borrow<Self::Key>;

    /// Splits `key` into its path.
    fn tokens_from_key(&self, key: &Self::Key) -> Vec<Self::Token>;

    /// Reassembles a key from its path.
    fn key_from_tokens(&self, tokens: &[Self::Token]) -> Self::Owned;
}

/// Codec for keys that already are token sequences.
pub struct TokenCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TokenCodec<T> {
    /// Creates the codec.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TokenCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TokenCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> PartialEq for TokenCodec<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for TokenCodec<T> {}

impl<T> fmt::Debug for TokenCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenCodec")
    }
}

impl<T: Clone + Eq + Hash + Ord> PathCodec for TokenCodec<T> {
    type Token = T;
    type Key = [T];
    type Owned = Vec<T>;

    fn tokens_from_key(&self, key: &[T]) -> Vec<T> {
        key.to_vec()
    }

    fn key_from_tokens(&self, tokens: &[T]) -> Vec<T> {
        tokens.to_vec()
    }
}

/// Codec treating a string as a sequence of characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCodec;

impl PathCodec for CharCodec {
    type Token = char;
    type Key = str;
    type Owned = String;

    fn tokens_from_key(&self, key: &str) -> Vec<char> {
        key.chars().collect()
    }

    fn key_from_tokens(&self, tokens: &[char]) -> String {
        tokens.iter().collect()
    }
}

/// Codec splitting a string into components on a separator.
///
/// Splitting follows [`str::split`], so `""` is a single empty component and
/// `"/a"` is `["", "a"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorCodec {
    separator: String,
}

impl SeparatorCodec {
    /// Separator used by [`SeparatorCodec::default`].
    pub const DEFAULT_SEPARATOR: &'static str = "/";

    /// Creates a codec splitting on `separator`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidConfiguration`] if `separator` is empty.
    pub fn new(separator: impl Into<String>) -> Result<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(TrieError::InvalidConfiguration("separator can not be empty"));
        }
        Ok(Self { separator })
    }

    /// The separator keys are split on.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for SeparatorCodec {
    fn default() -> Self {
        Self {
            separator: Self::DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

impl PathCodec for SeparatorCodec {
    type Token = String;
    type Key = str;
    type Owned = String;

    fn tokens_from_key(&self, key: &str) -> Vec<String> {
        key.split(self.separator.as_str()).map(str::to_owned).collect()
    }

    fn key_from_tokens(&self, tokens: &[String]) -> String {
        tokens.join(&self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_codec() {
        let codec = CharCodec;
        assert_eq!(codec.tokens_from_key("man"), vec!['m', 'a', 'n']);
        assert_eq!(codec.key_from_tokens(&['m', 'a', 'n']), "man");
        assert!(codec.tokens_from_key("").is_empty());
    }

    #[test]
    fn test_separator_codec_splits_like_str_split() {
        let codec = SeparatorCodec::default();
        assert_eq!(codec.tokens_from_key(""), vec![String::new()]);
        assert_eq!(codec.tokens_from_key("/admin"), vec!["", "admin"]);
        assert_eq!(codec.tokens_from_key("a//b"), vec!["a", "", "b"]);
        assert_eq!(codec.key_from_tokens(&codec.tokens_from_key("/admin/")), "/admin/");
    }

    #[test]
    fn test_separator_codec_multichar() {
        let codec = SeparatorCodec::new("::").unwrap();
        assert_eq!(codec.separator(), "::");
        assert_eq!(codec.tokens_from_key("std::io::Read"), vec!["std", "io", "Read"]);
        assert_eq!(codec.key_from_tokens(&["a".into(), "b".into()]), "a::b");
    }

    #[test]
    fn test_empty_separator_rejected() {
        assert_eq!(
            SeparatorCodec::new(""),
            Err(TrieError::InvalidConfiguration("separator can not be empty"))
        );
    }

    #[test]
    fn test_token_codec() {
        let codec = TokenCodec::<u8>::new();
        assert_eq!(codec.tokens_from_key(&[1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(codec.key_from_tokens(&[]), Vec::<u8>::new());
    }
}
