//! # `prefixtrie` - Generic Prefix Trie
//!
//! An in-memory trie keyed by sequences of tokens: strings split into
//! characters, paths split on a separator, or plain token slices. On top of
//! ordinary map operations it answers prefix questions:
//!
//! - does any stored key start with `X` ([`Trie::has_subtrie`]);
//! - which stored keys are prefixes of `X`, the shortest or the longest
//!   ([`Trie::shortest_prefix`], [`Trie::longest_prefix`], [`Trie::prefixes`]);
//! - which keys lie under `X` ([`Trie::iter_prefix`]).
//!
//! Whole subtrees can be replaced or removed in one step
//! ([`Trie::assign_subtree`], [`Trie::remove_subtree`]), which is what
//! [`PrefixSet`] is built on.
//!
//! ## Architecture
//!
//! Keys never reach the tree directly. A [`PathCodec`] strategy, fixed when the
//! trie is built, decodes each key into a token path and renders paths back
//! into keys. The codec must satisfy the round-trip law
//! `key_from_tokens(tokens_from_key(k)) == k`.
//!
//! Nodes own their children; a node left with neither a value nor children is
//! pruned immediately, and the root always exists.
//!
//! ## Example
//!
//! ```rust
//! use prefixtrie::{CharTrie, PrefixSet, CharCodec};
//!
//! let mut trie = CharTrie::new();
//! trie.insert("foobar", 1);
//! trie.insert("foobaz", 2);
//! assert!(trie.has_subtrie("foo"));
//! assert_eq!(trie.longest_prefix("foobarbaz"), Some(("foobar".to_owned(), &1)));
//!
//! // Collapse everything under "foo" into "foo" itself.
//! trie.assign_subtree("foo", 0);
//! assert_eq!(trie.keys().collect::<Vec<_>>(), vec!["foo"]);
//!
//! let mut set: PrefixSet<CharCodec> = PrefixSet::new();
//! set.add("foobar");
//! set.add("foo");
//! assert_eq!(set.len(), 1);
//! assert!(set.contains("foobarbaz"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events from mutating operations.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

pub mod error;
pub mod trie;

pub use error::{Result, TrieError};
pub use trie::{
    CharCodec, CharTrie, PathCodec, PrefixSet, SeparatorCodec, StringTrie, TokenCodec, TokenTrie,
    Trie,
};
