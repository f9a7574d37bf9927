use std::iter::FusedIterator;

use super::avl_tree::AvlTree;
use super::node::Node;
use crate::collections::linked::Stack;

impl<'a, K, V, F> IntoIterator for &'a AvlTree<K, V, F> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Stack::new(),
            remaining: self.len,
        };
        iter.descend_left(self.root.0.as_deref());

        iter
    }
}

/// A borrowing in-order iterator over an [`AvlTree`], yielding entries in ascending key order.
/// See [`AvlTree::iter`].
///
/// Holds the path from the root to the current entry on an explicit stack, so a full traversal
/// visits each node a constant number of times.
pub struct Iter<'a, K, V> {
    stack: Stack<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn descend_left(&mut self, mut branch: Option<&'a Node<K, V>>) {
        while let Some(node) = branch {
            self.stack.push(node);
            branch = node.left.0.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.0.as_deref());
        self.remaining -= 1;

        Some(node.entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V, F> IntoIterator for AvlTree<K, V, F> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, F>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owned iterator over an [`AvlTree`], repeatedly detaching the smallest remaining entry.
pub struct IntoIter<K, V, F = fn(&K, &K) -> std::cmp::Ordering>(AvlTree<K, V, F>);

impl<K, V, F> Iterator for IntoIter<K, V, F> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.0.root.take_first_entry();
        if result.is_some() {
            self.0.len -= 1;
        }

        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<K, V, F> FusedIterator for IntoIter<K, V, F> {}

impl<K, V, F> ExactSizeIterator for IntoIter<K, V, F> {}
