//! Lazy traversals over a trie.

use std::hash::Hash;
use std::iter::FusedIterator;
use std::vec;

use super::codec::PathCodec;
use super::node::Node;

type Children<'a, T, V> = vec::IntoIter<(&'a T, &'a Node<T, V>)>;

/// Iterator over the items of a [`Trie`](super::Trie), in pre-order.
/// Yields `(C::Owned, &V)`.
pub struct Iter<'a, C: PathCodec, V> {
    codec: &'a C,
    sorted: bool,
    shallow: bool,
    /// Node the traversal starts at, until it has been visited.
    start: Option<&'a Node<C::Token, V>>,
    // One frame of pending children per node on the current path.
    stack: Vec<Children<'a, C::Token, V>>,
    // Path of the node most recently entered.
    key_buf: Vec<C::Token>,
}

impl<'a, C: PathCodec, V> Iter<'a, C, V> {
    pub(crate) fn new(
        codec: &'a C,
        start: &'a Node<C::Token, V>,
        prefix: Vec<C::Token>,
        sorted: bool,
    ) -> Self {
        Self {
            codec,
            sorted,
            shallow: false,
            start: Some(start),
            stack: Vec::new(),
            key_buf: prefix,
        }
    }

    /// Stops the traversal from descending below value-bearing nodes, so only
    /// the topmost stored keys are produced.
    ///
    /// Takes effect for nodes not yet visited; call it before iterating.
    #[must_use]
    pub fn shallow(mut self) -> Self {
        self.shallow = true;
        self
    }

    fn frame(&self, node: &'a Node<C::Token, V>) -> Children<'a, C::Token, V> {
        if self.shallow && node.has_value() {
            Vec::new().into_iter()
        } else {
            node.children_in_order(self.sorted).into_iter()
        }
    }
}

impl<'a, C: PathCodec, V> Iterator for Iter<'a, C, V> {
    type Item = (C::Owned, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.start.take() {
            let frame = self.frame(node);
            self.stack.push(frame);
            if let Some(value) = node.value() {
                return Some((self.codec.key_from_tokens(&self.key_buf), value));
            }
        }

        loop {
            let frame = self.stack.last_mut()?;
            if let Some((token, child)) = frame.next() {
                self.key_buf.push(token.clone());
                let frame = self.frame(child);
                self.stack.push(frame);
                if let Some(value) = child.value() {
                    return Some((self.codec.key_from_tokens(&self.key_buf), value));
                }
            } else {
                // Done with this node
                self.stack.pop();
                if !self.stack.is_empty() {
                    self.key_buf.pop();
                }
            }
        }
    }
}

impl<C: PathCodec, V> FusedIterator for Iter<'_, C, V> {}

/// Iterator over the keys of a [`Trie`](super::Trie), in pre-order.
pub struct Keys<'a, C: PathCodec, V> {
    inner: Iter<'a, C, V>,
}

impl<'a, C: PathCodec, V> Keys<'a, C, V> {
    pub(crate) fn new(inner: Iter<'a, C, V>) -> Self {
        Self { inner }
    }

    /// See [`Iter::shallow`].
    #[must_use]
    pub fn shallow(self) -> Self {
        Self::new(self.inner.shallow())
    }
}

impl<C: PathCodec, V> Iterator for Keys<'_, C, V> {
    type Item = C::Owned;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl<C: PathCodec, V> FusedIterator for Keys<'_, C, V> {}

/// Iterator over the values of a [`Trie`](super::Trie), in pre-order.
pub struct Values<'a, C: PathCodec, V> {
    inner: Iter<'a, C, V>,
}

impl<'a, C: PathCodec, V> Values<'a, C, V> {
    pub(crate) fn new(inner: Iter<'a, C, V>) -> Self {
        Self { inner }
    }
}

impl<'a, C: PathCodec, V> Iterator for Values<'a, C, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

impl<C: PathCodec, V> FusedIterator for Values<'_, C, V> {}

/// Position of a walk down one path: the next node to inspect and its depth.
struct WalkState<'a, T, V> {
    node: Option<&'a Node<T, V>>,
    depth: usize,
}

impl<'a, T: Hash + Eq, V> WalkState<'a, T, V> {
    /// Advances to the next value-bearing node on `path`, returning its depth.
    fn advance(&mut self, path: &[T]) -> Option<(usize, &'a V)> {
        loop {
            let node = self.node?;
            let depth = self.depth;
            self.node = path.get(depth).and_then(|token| node.child(token));
            self.depth += 1;
            if let Some(value) = node.value() {
                return Some((depth, value));
            }
        }
    }
}

/// Walk yielding the depth and value of every value-bearing node along a
/// path, root first.
pub(crate) struct PathWalk<'a, 'p, T, V> {
    state: WalkState<'a, T, V>,
    path: &'p [T],
}

impl<'a, 'p, T, V> PathWalk<'a, 'p, T, V> {
    pub(crate) fn new(root: &'a Node<T, V>, path: &'p [T]) -> Self {
        Self {
            state: WalkState {
                node: Some(root),
                depth: 0,
            },
            path,
        }
    }
}

impl<'a, T: Hash + Eq, V> Iterator for PathWalk<'a, '_, T, V> {
    type Item = (usize, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.state.advance(self.path)
    }
}

/// Iterator over the stored prefixes of a key, shortest first.
/// Yields `(C::Owned, &V)`.
pub struct Prefixes<'a, C: PathCodec, V> {
    codec: &'a C,
    state: WalkState<'a, C::Token, V>,
    path: Vec<C::Token>,
}

impl<'a, C: PathCodec, V> Prefixes<'a, C, V> {
    pub(crate) fn new(codec: &'a C, root: &'a Node<C::Token, V>, path: Vec<C::Token>) -> Self {
        Self {
            codec,
            state: WalkState {
                node: Some(root),
                depth: 0,
            },
            path,
        }
    }
}

impl<'a, C: PathCodec, V> Iterator for Prefixes<'a, C, V> {
    type Item = (C::Owned, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, value) = self.state.advance(&self.path)?;
        Some((self.codec.key_from_tokens(&self.path[..depth]), value))
    }
}

impl<C: PathCodec, V> FusedIterator for Prefixes<'_, C, V> {}

#[cfg(test)]
mod tests {
    use crate::trie::{CharTrie, StringTrie};

    #[test]
    fn test_iter_is_restartable() {
        let trie: CharTrie<u32> = [("a", 1), ("ab", 2), ("b", 3)].into_iter().collect();
        let first: Vec<_> = trie.iter().collect();
        let second: Vec<_> = trie.iter().collect();
        assert_eq!(first, second);

        // Dropping an iterator early leaves the trie untouched.
        let mut partial = trie.keys();
        assert_eq!(partial.next().as_deref(), Some("a"));
        drop(partial);
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_iter_prefix_on_valueless_node() {
        let trie: StringTrie<u32> = [("/a/b", 1), ("/a/c/d", 2), ("/x", 3)]
            .into_iter()
            .collect();
        let keys: Vec<String> = trie.keys_with_prefix("/a").unwrap().collect();
        assert_eq!(keys, vec!["/a/b", "/a/c/d"]);
        let values: Vec<u32> = trie.values_with_prefix("/a/c").unwrap().copied().collect();
        assert_eq!(values, vec![2]);
    }

    #[test]
    fn test_shallow_keys_under_prefix() {
        let trie: CharTrie<()> = [("ab", ()), ("abc", ()), ("ad", ()), ("ade", ())]
            .into_iter()
            .collect();
        let top: Vec<String> = trie.keys_with_prefix("a").unwrap().shallow().collect();
        assert_eq!(top, vec!["ab", "ad"]);
    }

    #[test]
    fn test_prefixes_fuse() {
        let trie: CharTrie<u32> = [("", 0), ("ab", 1)].into_iter().collect();
        let mut prefixes = trie.prefixes("abc");
        assert_eq!(prefixes.next(), Some((String::new(), &0)));
        assert_eq!(prefixes.next(), Some(("ab".to_owned(), &1)));
        assert_eq!(prefixes.next(), None);
        assert_eq!(prefixes.next(), None);
    }
}
