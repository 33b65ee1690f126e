use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Result, TrieError};

/// A node in the trie.
///
/// Each node contains:
/// - An optional value (if this node terminates a stored key).
/// - The children, keyed by the next token of the path.
///
/// Nodes own their children outright. The trie keeps the invariant that every
/// non-root node either holds a value or has at least one child.
#[derive(Debug, Clone)]
pub(crate) struct Node<T, V> {
    /// The value stored at this node, if any.
    pub(crate) value: Option<V>,
    /// Children nodes, keyed by the token leading to them.
    pub(crate) children: HashMap<T, Node<T, V>>,
}

impl<T, V> Node<T, V> {
    /// Creates a new empty node.
    pub(crate) fn new() -> Self {
        Self {
            value: None,
            children: HashMap::new(),
        }
    }

    pub(crate) fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub(crate) fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// Returns the value, failing with `KeyAbsent` when the node has none.
    pub(crate) fn get_value(&self) -> Result<&V> {
        self.value.as_ref().ok_or(TrieError::KeyAbsent)
    }

    /// Stores `value`, returning the one it displaced.
    pub(crate) fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    pub(crate) fn clear_value(&mut self) -> Option<V> {
        self.value.take()
    }

    pub(crate) fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// A node with neither a value nor children is pruned from its parent.
    pub(crate) fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Number of value-bearing nodes in this subtree, this node included.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut size = usize::from(self.value.is_some());
        for child in self.children.values() {
            size += child.subtree_size();
        }
        size
    }

    /// Drops the value and every descendant.
    pub(crate) fn clear(&mut self) {
        self.value = None;
        self.children = HashMap::new();
    }
}

impl<T: Hash + Eq, V> Node<T, V> {
    pub(crate) fn child(&self, token: &T) -> Option<&Node<T, V>> {
        self.children.get(token)
    }

    pub(crate) fn child_mut(&mut self, token: &T) -> Option<&mut Node<T, V>> {
        self.children.get_mut(token)
    }

    /// Finds the child for `token`, creating an empty one if it is missing.
    pub(crate) fn child_or_insert(&mut self, token: T) -> &mut Node<T, V> {
        self.children.entry(token).or_insert_with(Node::new)
    }

    pub(crate) fn remove_child(&mut self, token: &T) -> Option<Node<T, V>> {
        self.children.remove(token)
    }

    /// Walks `path` from this node, returning the node at its end.
    pub(crate) fn descend(&self, path: &[T]) -> Option<&Node<T, V>> {
        path.iter().try_fold(self, |node, token| node.child(token))
    }

    pub(crate) fn descend_mut(&mut self, path: &[T]) -> Option<&mut Node<T, V>> {
        path.iter().try_fold(self, |node, token| node.child_mut(token))
    }

    /// Walks `path`, creating every missing node on the way.
    pub(crate) fn descend_or_create(&mut self, path: &[T]) -> &mut Node<T, V>
    where
        T: Clone,
    {
        path.iter()
            .fold(self, |node, token| node.child_or_insert(token.clone()))
    }
}

impl<T: Ord, V> Node<T, V> {
    /// Returns the children, sorted by token when `sorted` is set and in the
    /// map's own order otherwise.
    pub(crate) fn children_in_order(&self, sorted: bool) -> Vec<(&T, &Node<T, V>)> {
        let mut children: Vec<_> = self.children.iter().collect();
        if sorted {
            children.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }
        children
    }
}

impl<T, V> Default for Node<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, V: PartialEq> PartialEq for Node<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.children == other.children
    }
}

impl<T: Hash + Eq, V: Eq> Eq for Node<T, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_lifecycle() {
        let mut node: Node<char, bool> = Node::new();
        assert!(node.is_empty());
        assert_eq!(node.get_value(), Err(TrieError::KeyAbsent));

        // `false` is a value, not an absence.
        assert_eq!(node.set_value(false), None);
        assert!(node.has_value());
        assert_eq!(node.get_value(), Ok(&false));
        assert_eq!(node.set_value(true), Some(false));
        assert_eq!(node.clear_value(), Some(true));
        assert!(node.is_empty());
    }

    #[test]
    fn test_descend_and_size() {
        let mut root: Node<char, u32> = Node::new();
        root.descend_or_create(&['a', 'b']).set_value(1);
        root.descend_or_create(&['a', 'c']).set_value(2);
        root.descend_or_create(&['a']).set_value(3);

        assert_eq!(root.subtree_size(), 3);
        assert!(root.descend(&['a', 'b']).is_some());
        assert!(root.descend(&['a', 'd']).is_none());
        assert!(root.descend(&['a']).is_some_and(Node::has_children));

        let order: Vec<char> = root
            .descend(&['a'])
            .map(|n| n.children_in_order(true).into_iter().map(|(t, _)| *t).collect())
            .unwrap_or_default();
        assert_eq!(order, vec!['b', 'c']);

        assert!(root.remove_child(&'a').is_some());
        assert!(root.is_empty());
    }

    #[test]
    fn test_node_equality_ignores_insertion_order() {
        let mut a: Node<char, u32> = Node::new();
        a.descend_or_create(&['x', 'y']).set_value(1);
        a.descend_or_create(&['z']).set_value(2);

        let mut b: Node<char, u32> = Node::new();
        b.descend_or_create(&['z']).set_value(2);
        b.descend_or_create(&['x', 'y']).set_value(1);
        assert_eq!(a, b);

        b.descend_or_create(&['x']).set_value(3);
        assert_ne!(a, b);
    }
}
