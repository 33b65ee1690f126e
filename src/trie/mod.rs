//! Prefix trie.
//!
//! A trie keyed by token sequences. A [`PathCodec`] turns the caller's keys
//! (strings, paths, token slices) into the token paths stored in the tree and
//! renders them back, so one engine serves [`CharTrie`], [`StringTrie`] and
//! [`TokenTrie`] alike. [`PrefixSet`] builds on the same engine.

pub mod adapters;
pub mod codec;
pub mod iter;
pub mod map;
mod node;
mod serialize;
pub mod set;

pub use adapters::{CharTrie, StringTrie, TokenTrie};
pub use codec::{CharCodec, PathCodec, SeparatorCodec, TokenCodec};
pub use iter::{Iter, Keys, Prefixes, Values};
pub use map::Trie;
pub use set::{PrefixSet, PrefixSetIter};
