//! A set of prefixes built on the trie.

use std::borrow::Borrow;
use std::fmt;

use super::codec::{PathCodec, TokenCodec};
use super::iter::Keys;
use super::map::Trie;
use crate::error::{Result, TrieError};

/// A set of prefixes.
///
/// The set is said to contain a key if the key or one of its prefixes has
/// been added: after adding `"foo"` it contains `"foo"` as well as `"foobar"`.
///
/// Only the shortest covering keys are stored, so no stored key is a prefix of
/// another. Adding a key that is already covered does nothing; adding a prefix
/// of stored keys replaces them with that single prefix, which means `len` can
/// shrink on insertion. Removal is not supported, since there is no single
/// answer to what removing a collapsed prefix should leave behind.
pub struct PrefixSet<C: PathCodec = TokenCodec<u8>> {
    trie: Trie<C, ()>,
}

impl<C: PathCodec + Default> PrefixSet<C> {
    /// Creates an empty prefix set.
    pub fn new() -> Self {
        Self::with_codec(C::default())
    }
}

impl<C: PathCodec> PrefixSet<C> {
    /// Creates an empty prefix set using `codec` to translate keys.
    pub fn with_codec(codec: C) -> Self {
        Self {
            trie: Trie::with_codec(codec),
        }
    }

    /// Returns the number of stored (shortest) prefixes.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Removes all keys from the set.
    pub fn clear(&mut self) {
        self.trie.clear();
    }

    /// Returns true if `key` or one of its prefixes was added.
    pub fn contains(&self, key: &C::Key) -> bool {
        self.trie.shortest_prefix(key).is_some()
    }

    /// Adds `key` to the set.
    ///
    /// Has no effect if the set already contains `key`. Otherwise stored keys
    /// extending `key` are replaced by `key` itself. Returns whether the set
    /// changed.
    pub fn add(&mut self, key: &C::Key) -> bool {
        if self.contains(key) {
            return false;
        }
        self.trie.assign_subtree(key, ());
        true
    }

    /// Always fails: keys cannot be removed from a prefix set.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::UnsupportedOperation`].
    pub fn discard(&mut self, _key: &C::Key) -> Result<()> {
        Err(TrieError::UnsupportedOperation(
            "removing keys from a PrefixSet is not supported",
        ))
    }

    /// Always fails: keys cannot be removed from a prefix set.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::UnsupportedOperation`].
    pub fn remove(&mut self, _key: &C::Key) -> Result<()> {
        Err(TrieError::UnsupportedOperation(
            "removing keys from a PrefixSet is not supported",
        ))
    }

    /// Always fails: keys cannot be removed from a prefix set.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::UnsupportedOperation`].
    pub fn pop(&mut self) -> Result<C::Owned> {
        Err(TrieError::UnsupportedOperation(
            "removing keys from a PrefixSet is not supported",
        ))
    }

    /// Iterates over the stored prefixes.
    pub fn iter(&self) -> Keys<'_, C, ()> {
        self.trie.keys()
    }

    /// Iterates over stored prefixes starting with `prefix`.
    ///
    /// If `prefix` lies below a stored key it is itself an element of the set
    /// and is the only item produced, even though it was never added: with
    /// only `"foo"` added, `iter_prefix("foobar")` yields `"foobar"`.
    pub fn iter_prefix(&self, prefix: &C::Key) -> PrefixSetIter<'_, C> {
        if let Ok(keys) = self.trie.keys_with_prefix(prefix) {
            PrefixSetIter::Stored(keys)
        } else if self.contains(prefix) {
            let codec = self.trie.codec();
            let key = codec.key_from_tokens(&codec.tokens_from_key(prefix));
            PrefixSetIter::Covered(Some(key))
        } else {
            PrefixSetIter::Covered(None)
        }
    }

    /// The underlying trie.
    pub fn as_trie(&self) -> &Trie<C, ()> {
        &self.trie
    }
}

/// Iterator returned by [`PrefixSet::iter_prefix`].
pub enum PrefixSetIter<'a, C: PathCodec> {
    /// Stored keys below an existing node.
    Stored(Keys<'a, C, ()>),
    /// At most one key covered by a shorter stored prefix.
    Covered(Option<C::Owned>),
}

impl<C: PathCodec> Iterator for PrefixSetIter<'_, C> {
    type Item = C::Owned;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            PrefixSetIter::Stored(keys) => keys.next(),
            PrefixSetIter::Covered(key) => key.take(),
        }
    }
}

impl<C: PathCodec + Default> Default for PrefixSet<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PathCodec + Clone> Clone for PrefixSet<C> {
    fn clone(&self) -> Self {
        Self {
            trie: self.trie.clone(),
        }
    }
}

impl<C: PathCodec + PartialEq> PartialEq for PrefixSet<C> {
    fn eq(&self, other: &Self) -> bool {
        self.trie == other.trie
    }
}

impl<C: PathCodec + Eq> Eq for PrefixSet<C> {}

impl<C> fmt::Debug for PrefixSet<C>
where
    C: PathCodec,
    C::Owned: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<C: PathCodec, K: Borrow<C::Key>> Extend<K> for PrefixSet<C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key.borrow());
        }
    }
}

impl<C: PathCodec + Default, K: Borrow<C::Key>> FromIterator<K> for PrefixSet<C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, C: PathCodec> IntoIterator for &'a PrefixSet<C> {
    type Item = C::Owned;
    type IntoIter = Keys<'a, C, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
