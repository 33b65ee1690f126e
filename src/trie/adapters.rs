//! Ready-made trie flavors.

use super::codec::{CharCodec, SeparatorCodec, TokenCodec};
use super::map::Trie;
use crate::error::Result;

/// A trie keyed by strings, one token per character.
///
/// A natural fit for a dictionary of words:
///
/// ```
/// use prefixtrie::CharTrie;
///
/// let words: CharTrie<bool> = ["wombat", "woman", "man", "manhole"]
///     .into_iter()
///     .map(|w| (w, true))
///     .collect();
///
/// assert!(words.has_subtrie("wo"));
/// assert!(words.has_key("man"));
/// assert!(words.has_subtrie("man"));
/// assert!(!words.has_subtrie("manhole"));
/// ```
pub type CharTrie<V> = Trie<CharCodec, V>;

/// A trie keyed by strings split into components on a separator (`"/"` by
/// default).
///
/// Paths mapped to request handlers are the canonical use:
///
/// ```
/// use prefixtrie::StringTrie;
///
/// let mut handlers = StringTrie::new();
/// handlers.insert("", "root");
/// handlers.insert("/admin", "admin");
/// handlers.insert("/admin/images", "admin_images");
///
/// let (path, handler) = handlers.longest_prefix("/admin/images/foo").unwrap();
/// assert_eq!(path, "/admin/images");
/// assert_eq!(*handler, "admin_images");
/// ```
pub type StringTrie<V> = Trie<SeparatorCodec, V>;

/// A trie keyed directly by token slices.
pub type TokenTrie<T, V> = Trie<TokenCodec<T>, V>;

impl<V> Trie<SeparatorCodec, V> {
    /// Creates an empty trie splitting keys on `separator`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidConfiguration`](crate::TrieError::InvalidConfiguration)
    /// if `separator` is empty.
    pub fn with_separator(separator: impl Into<String>) -> Result<Self> {
        Ok(Self::with_codec(SeparatorCodec::new(separator)?))
    }

    /// The separator keys are split on.
    pub fn separator(&self) -> &str {
        self.codec().separator()
    }
}
