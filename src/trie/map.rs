//! The trie container: mutation, lookups and prefix queries.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use super::codec::PathCodec;
use super::iter::{Iter, Keys, PathWalk, Prefixes, Values};
use super::node::Node;
use crate::error::{Result, TrieError};

/// A prefix trie mapping keys to values.
///
/// Keys are decoded into token paths by the codec `C`; every stored key is a
/// path from the root to a value-bearing node. Besides exact-match lookups the
/// trie answers prefix queries (shortest and longest stored prefix of a key,
/// existence of keys below a prefix) and iterates over keys in pre-order.
///
/// Siblings are visited in token order unless sorting is switched off with
/// [`Trie::enable_sorting`].
pub struct Trie<C: PathCodec, V> {
    /// Root node; always present, even when the trie is empty.
    pub(crate) root: Node<C::Token, V>,
    /// Number of value-bearing nodes.
    len: usize,
    codec: C,
    sorted: bool,
}

impl<C: PathCodec + Default, V> Trie<C, V> {
    /// Creates an empty trie using the codec's default configuration.
    pub fn new() -> Self {
        Self::with_codec(C::default())
    }

    /// Creates a trie mapping every key in `keys` to a clone of `value`.
    pub fn from_keys<I, K>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Borrow<C::Key>,
        V: Clone,
    {
        keys.into_iter().map(|key| (key, value.clone())).collect()
    }
}

impl<C: PathCodec, V> Trie<C, V> {
    /// Creates an empty trie using `codec` to translate keys.
    pub fn with_codec(codec: C) -> Self {
        Self {
            root: Node::new(),
            len: 0,
            codec,
            sorted: true,
        }
    }

    /// The codec translating keys of this trie.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Returns the number of values stored in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no value is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Chooses whether siblings are visited in token order (the default) or in
    /// the order of the underlying hash map, which is cheaper but unspecified.
    pub fn enable_sorting(&mut self, enable: bool) {
        self.sorted = enable;
    }

    /// Whether siblings are visited in token order.
    pub fn sorting_enabled(&self) -> bool {
        self.sorted
    }

    /// Removes every key. The root node is kept.
    pub fn clear(&mut self) {
        self.root.clear();
        self.len = 0;
    }

    fn path(&self, key: &C::Key) -> Vec<C::Token> {
        self.codec.tokens_from_key(key)
    }

    fn node(&self, key: &C::Key) -> Option<&Node<C::Token, V>> {
        self.root.descend(&self.path(key))
    }

    /// Inserts a key-value pair into the trie.
    /// Returns the old value if the key was already present.
    pub fn insert(&mut self, key: &C::Key, value: V) -> Option<V> {
        let path = self.path(key);
        let previous = self.root.descend_or_create(&path).set_value(value);
        if previous.is_none() {
            self.len += 1;
        }
        trace_event!(trace, depth = path.len(), replaced = previous.is_some(), "insert");
        previous
    }

    /// Gets a reference to the value stored at exactly `key`.
    pub fn get(&self, key: &C::Key) -> Option<&V> {
        self.node(key).and_then(Node::value)
    }

    /// Gets a mutable reference to the value stored at exactly `key`.
    pub fn get_mut(&mut self, key: &C::Key) -> Option<&mut V> {
        let path = self.path(key);
        self.root.descend_mut(&path).and_then(Node::value_mut)
    }

    /// Gets the value stored at exactly `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyAbsent`] if no value is stored there.
    pub fn try_get(&self, key: &C::Key) -> Result<&V> {
        self.node(key).ok_or(TrieError::KeyAbsent)?.get_value()
    }

    /// Returns the value at `key`, inserting the result of `f` first if the
    /// key holds no value yet.
    pub fn get_or_insert_with<F>(&mut self, key: &C::Key, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let path = self.path(key);
        let node = self.root.descend_or_create(&path);
        if !node.has_value() {
            self.len += 1;
        }
        node.value.get_or_insert_with(f)
    }

    /// Returns true if a value is stored at exactly `key`.
    pub fn has_key(&self, key: &C::Key) -> bool {
        self.node(key).is_some_and(Node::has_value)
    }

    /// Alias of [`Trie::has_key`].
    pub fn contains_key(&self, key: &C::Key) -> bool {
        self.has_key(key)
    }

    /// Returns true if a node exists at `key`, whether or not it holds a value.
    ///
    /// A node without a value exists exactly when some stored key extends `key`.
    pub fn has_node(&self, key: &C::Key) -> bool {
        self.node(key).is_some()
    }

    /// Returns true if some stored key is strictly longer than `key` and has it
    /// as a prefix.
    pub fn has_subtrie(&self, key: &C::Key) -> bool {
        self.node(key).is_some_and(Node::has_children)
    }

    /// Removes the value at `key`, pruning nodes left without value or children.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyAbsent`] if no value is stored at `key`.
    pub fn remove(&mut self, key: &C::Key) -> Result<V> {
        let path = self.path(key);
        let value = edit_and_prune(&mut self.root, &path, Node::clear_value)
            .ok_or(TrieError::KeyAbsent)?;
        self.len -= 1;
        trace_event!(trace, depth = path.len(), "remove");
        Ok(value)
    }

    /// Replaces every key having `prefix` as a prefix with the single key
    /// `prefix` holding `value`.
    ///
    /// Returns how many values were discarded, counting an old value at
    /// `prefix` itself.
    pub fn assign_subtree(&mut self, prefix: &C::Key, value: V) -> usize {
        let path = self.path(prefix);
        let node = self.root.descend_or_create(&path);
        let discarded = node.subtree_size();
        node.clear();
        node.set_value(value);
        self.len = self.len - discarded + 1;
        trace_event!(trace, depth = path.len(), discarded, "assign_subtree");
        discarded
    }

    /// Removes `prefix` and every key below it, pruning emptied ancestors.
    ///
    /// Returns the number of values removed. With an empty path this clears
    /// the trie.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyAbsent`] if no node exists at `prefix`.
    pub fn remove_subtree(&mut self, prefix: &C::Key) -> Result<usize> {
        let path = self.path(prefix);
        let removed = edit_and_prune(&mut self.root, &path, |node| {
            let size = node.subtree_size();
            node.clear();
            Some(size)
        })
        .ok_or(TrieError::KeyAbsent)?;
        self.len -= removed;
        trace_event!(trace, depth = path.len(), removed, "remove_subtree");
        Ok(removed)
    }

    /// Removes and returns one item.
    ///
    /// The item is the deepest one on the first branch in sibling order, so
    /// with sorting enabled repeated calls drain the trie deterministically.
    pub fn pop_item(&mut self) -> Option<(C::Owned, V)> {
        let mut path = Vec::new();
        let mut node = &self.root;
        while let Some((token, child)) = self.first_child(node) {
            path.push(token.clone());
            node = child;
        }
        let value = edit_and_prune(&mut self.root, &path, Node::clear_value)?;
        self.len -= 1;
        Some((self.codec.key_from_tokens(&path), value))
    }

    fn first_child<'a>(
        &self,
        node: &'a Node<C::Token, V>,
    ) -> Option<(&'a C::Token, &'a Node<C::Token, V>)> {
        if self.sorted {
            node.children.iter().min_by(|a, b| a.0.cmp(b.0))
        } else {
            node.children.iter().next()
        }
    }

    /// Returns the shortest stored key that is a prefix of `key`, with its value.
    pub fn shortest_prefix(&self, key: &C::Key) -> Option<(C::Owned, &V)> {
        let path = self.path(key);
        let (depth, value) = PathWalk::new(&self.root, &path).next()?;
        Some((self.codec.key_from_tokens(&path[..depth]), value))
    }

    /// Returns the longest stored key that is a prefix of `key`, with its value.
    pub fn longest_prefix(&self, key: &C::Key) -> Option<(C::Owned, &V)> {
        let path = self.path(key);
        let (depth, value) = PathWalk::new(&self.root, &path).last()?;
        Some((self.codec.key_from_tokens(&path[..depth]), value))
    }

    /// Iterates over every stored key that is a prefix of `key`, shortest first.
    pub fn prefixes(&self, key: &C::Key) -> Prefixes<'_, C, V> {
        Prefixes::new(&self.codec, &self.root, self.path(key))
    }

    /// Iterates over all items in pre-order.
    pub fn iter(&self) -> Iter<'_, C, V> {
        Iter::new(&self.codec, &self.root, Vec::new(), self.sorted)
    }

    /// Iterates over all keys in pre-order.
    pub fn keys(&self) -> Keys<'_, C, V> {
        Keys::new(self.iter())
    }

    /// Iterates over all values in pre-order.
    pub fn values(&self) -> Values<'_, C, V> {
        Values::new(self.iter())
    }

    /// Iterates over the items whose key has `prefix` as a prefix, `prefix`
    /// itself included.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyAbsent`] if no node exists at `prefix`.
    pub fn iter_prefix(&self, prefix: &C::Key) -> Result<Iter<'_, C, V>> {
        let path = self.path(prefix);
        let node = self.root.descend(&path).ok_or(TrieError::KeyAbsent)?;
        Ok(Iter::new(&self.codec, node, path, self.sorted))
    }

    /// Keys-only form of [`Trie::iter_prefix`].
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyAbsent`] if no node exists at `prefix`.
    pub fn keys_with_prefix(&self, prefix: &C::Key) -> Result<Keys<'_, C, V>> {
        self.iter_prefix(prefix).map(Keys::new)
    }

    /// Values-only form of [`Trie::iter_prefix`].
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyAbsent`] if no node exists at `prefix`.
    pub fn values_with_prefix(&self, prefix: &C::Key) -> Result<Values<'_, C, V>> {
        self.iter_prefix(prefix).map(Values::new)
    }

    /// Folds the subtree at `prefix` bottom-up.
    ///
    /// `f` receives each node's key, the results already computed for its
    /// children (in sibling order) and the node's value, if any. Nodes without
    /// a value are visited too, so `f` sees the whole shape of the subtree.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyAbsent`] if no node exists at `prefix`.
    pub fn traverse<R, F>(&self, prefix: &C::Key, mut f: F) -> Result<R>
    where
        F: FnMut(C::Owned, Vec<R>, Option<&V>) -> R,
    {
        let mut path = self.path(prefix);
        let node = self.root.descend(&path).ok_or(TrieError::KeyAbsent)?;
        Ok(self.fold_node(node, &mut path, &mut f))
    }

    fn fold_node<R, F>(&self, node: &Node<C::Token, V>, path: &mut Vec<C::Token>, f: &mut F) -> R
    where
        F: FnMut(C::Owned, Vec<R>, Option<&V>) -> R,
    {
        let mut results = Vec::with_capacity(node.children.len());
        for (token, child) in node.children_in_order(self.sorted) {
            path.push(token.clone());
            results.push(self.fold_node(child, path, f));
            path.pop();
        }
        f(self.codec.key_from_tokens(path), results, node.value())
    }
}

/// Applies `edit` to the node at `path` and removes every node on the way
/// back up that was left without value and children. The starting node is
/// never removed. Returns `None` if the path is missing or `edit` declined.
fn edit_and_prune<T, V, R, F>(node: &mut Node<T, V>, path: &[T], edit: F) -> Option<R>
where
    T: Hash + Eq,
    F: FnOnce(&mut Node<T, V>) -> Option<R>,
{
    let Some((token, rest)) = path.split_first() else {
        return edit(node);
    };
    let child = node.child_mut(token)?;
    let result = edit_and_prune(child, rest, edit)?;
    if child.is_empty() {
        node.remove_child(token);
    }
    Some(result)
}

impl<C: PathCodec + Default, V> Default for Trie<C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PathCodec + Clone, V: Clone> Clone for Trie<C, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            codec: self.codec.clone(),
            sorted: self.sorted,
        }
    }
}

/// Two tries are equal when they use equal codecs and store the same paths
/// with equal values.
impl<C: PathCodec + PartialEq, V: PartialEq> PartialEq for Trie<C, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.codec == other.codec && self.root == other.root
    }
}

impl<C: PathCodec + Eq, V: Eq> Eq for Trie<C, V> {}

impl<C, V> fmt::Debug for Trie<C, V>
where
    C: PathCodec,
    C::Owned: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<C, V, K> Extend<(K, V)> for Trie<C, V>
where
    C: PathCodec,
    K: Borrow<C::Key>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.borrow(), value);
        }
        trace_event!(debug, len = self.len, "bulk load");
    }
}

impl<C, V, K> FromIterator<(K, V)> for Trie<C, V>
where
    C: PathCodec + Default,
    K: Borrow<C::Key>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, C: PathCodec, V> IntoIterator for &'a Trie<C, V> {
    type Item = (C::Owned, &'a V);
    type IntoIter = Iter<'a, C, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
