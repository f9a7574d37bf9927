use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::iter::Iter;
use super::node::Branch;

/// An ordered map backed by a self-balancing AVL tree, with the key order decided by the
/// comparator captured at construction.
///
/// Every node's subtree heights differ by at most one, and the tree restores that bound with at
/// most one single or double rotation per level on the way back out of an insertion or removal.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of entries in the AvlTree.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `get` | `O(log n)` |
/// | `lower_bound` | `O(log n)` |
/// | `min_key` | `O(log n)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `swap_with` | `O(1)` |
///
/// # Examples
/// ```
/// # use clib_collections::collections::avl::AvlTree;
/// let mut tree = AvlTree::new();
/// tree.insert(3, "three");
/// tree.insert(1, "one");
/// tree.insert(2, "two");
///
/// assert_eq!(tree.get(&2), Some(&"two"));
/// assert_eq!(tree.min_key(), Some(&1));
/// assert_eq!(tree.remove(&1), Some("one"));
/// assert_eq!(tree.get(&1), None);
/// ```
pub struct AvlTree<K, V, F = fn(&K, &K) -> Ordering> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
    pub(crate) compare: F,
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Creates an empty AvlTree ordered by [`K::cmp`](Ord::cmp).
    pub fn new() -> AvlTree<K, V> {
        AvlTree::with_comparator(K::cmp as fn(&K, &K) -> Ordering)
    }
}

impl<K, V, F> AvlTree<K, V, F> {
    /// Creates an empty AvlTree ordered by the provided comparator. The comparator must define
    /// a total order over the keys.
    pub const fn with_comparator(compare: F) -> AvlTree<K, V, F> {
        AvlTree {
            root: Branch(None),
            len: 0,
            compare,
        }
    }

    /// Returns the number of entries in the AvlTree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the AvlTree contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every entry, leaving the AvlTree empty.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    /// Exchanges the entire contents of two AvlTrees, comparators included, in O(1) by swapping
    /// the roots and lengths only; no entries are copied.
    pub fn swap_with(&mut self, other: &mut AvlTree<K, V, F>) {
        mem::swap(self, other);
    }

    /// Returns a borrowing iterator over the AvlTree's entries, in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }
}

impl<K, V, F: Fn(&K, &K) -> Ordering> AvlTree<K, V, F> {
    /// Inserts the provided key and value. If the key is already present its value is replaced
    /// and the old value returned, with no structural change; otherwise a fresh leaf is added
    /// and every ancestor rebalanced on the way back up.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::avl::AvlTree;
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.insert(1, "one"), None);
    /// assert_eq!(tree.insert(1, "uno"), Some("one"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let result = self.root.insert(key, value, &self.compare);
        if result.is_none() {
            self.len += 1;
        }

        result
    }

    /// Removes the entry with an equal key, returning both parts if one was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let result = self.root.remove_entry(key, &self.compare);
        if result.is_some() {
            self.len -= 1;
        }

        result
    }

    /// Removes the entry with an equal key, returning its value if one was present.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::avl::AvlTree;
    /// let mut tree: AvlTree<_, _> = [(1, 'a'), (2, 'b')].into_iter().collect();
    /// assert_eq!(tree.remove(&1), Some('a'));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|e| e.1)
    }

    /// Returns the stored key and value equal to the provided key, if present.
    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        let mut current = self.root.0.as_deref();

        while let Some(node) = current {
            match (self.compare)(key, &node.key) {
                Ordering::Less => current = node.left.0.as_deref(),
                Ordering::Greater => current = node.right.0.as_deref(),
                Ordering::Equal => return Some(node.entry()),
            }
        }

        None
    }

    /// Returns the value stored against an equal key, if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_entry(key).map(|e| e.1)
    }

    /// Returns a mutable reference to the value stored against an equal key, if present.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let compare = &self.compare;
        let mut current = self.root.0.as_deref_mut();

        while let Some(node) = current {
            match compare(key, &node.key) {
                Ordering::Less => current = node.left.0.as_deref_mut(),
                Ordering::Greater => current = node.right.0.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }

        None
    }

    /// Returns true if an entry with an equal key is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get_entry(key).is_some()
    }

    /// Returns the smallest stored key that is not less than the provided key, if one exists.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::avl::AvlTree;
    /// let tree: AvlTree<_, _> = [1, 3, 5, 8].into_iter().map(|k| (k, ())).collect();
    /// assert_eq!(tree.lower_bound(&4), Some(&5));
    /// assert_eq!(tree.lower_bound(&5), Some(&5));
    /// assert_eq!(tree.lower_bound(&9), None);
    /// ```
    pub fn lower_bound(&self, key: &K) -> Option<&K> {
        let mut best = None;
        let mut current = self.root.0.as_deref();

        while let Some(node) = current {
            match (self.compare)(key, &node.key) {
                Ordering::Greater => current = node.right.0.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => {
                    // A candidate; anything smaller but still >= key sits to its left.
                    best = Some(&node.key);
                    current = node.left.0.as_deref();
                }
            }
        }

        best
    }

    /// Returns the smallest key in the AvlTree, if one exists.
    pub fn min_key(&self) -> Option<&K> {
        let mut current = self.root.0.as_deref()?;

        while let Some(node) = current.left.0.as_deref() {
            current = node;
        }

        Some(&current.key)
    }

    /// Returns the greatest key in the AvlTree, if one exists.
    pub fn max_key(&self) -> Option<&K> {
        let mut current = self.root.0.as_deref()?;

        while let Some(node) = current.right.0.as_deref() {
            current = node;
        }

        Some(&current.key)
    }
}

impl<K: Ord, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, F: Clone> Clone for AvlTree<K, V, F> {
    /// Produces a fully independent deep copy with the same shape as the source, so no
    /// rebalancing is performed.
    fn clone(&self) -> Self {
        AvlTree {
            root: self.root.clone(),
            len: self.len,
            compare: self.compare.clone(),
        }
    }
}

impl<K, V, F: Fn(&K, &K) -> Ordering> Extend<(K, V)> for AvlTree<K, V, F> {
    fn extend<A: IntoIterator<Item = (K, V)>>(&mut self, iter: A) {
        for (key, value) in iter.into_iter() {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(value: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(value);
        tree
    }
}

impl<K: Debug, V: Debug, F> Debug for AvlTree<K, V, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("nodes", &DebugNodes(&self.root))
            .field("len", &self.len)
            .finish()
    }
}

struct DebugNodes<'a, K, V>(&'a Branch<K, V>);

impl<K: Debug, V: Debug> Debug for DebugNodes<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\n{:?}\n", self.0)
    }
}

impl<K: Debug, V: Debug, F> Display for AvlTree<K, V, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
