use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::collections::contiguous::Vector;

pub(crate) struct Branch<K, V>(pub(crate) Option<Box<Node<K, V>>>);

pub(crate) struct Node<K, V> {
    pub(crate) left: Branch<K, V>,
    pub(crate) right: Branch<K, V>,
    pub(crate) height: usize,
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Node<K, V> {
    pub(crate) fn leaf(key: K, value: V) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            height: 1,
            key,
            value,
        }
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }

    pub(crate) const fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    fn update_height(&mut self) {
        self.height = 1 + cmp::max(self.left.height(), self.right.height());
    }

    /// Positive when the left subtree is taller, negative when the right one is.
    fn balance(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }
}

impl<K, V> Branch<K, V> {
    pub(crate) fn height(&self) -> usize {
        match &self.0 {
            Some(node) => node.height,
            None => 0,
        }
    }

    fn balance(&self) -> isize {
        match &self.0 {
            Some(node) => node.balance(),
            None => 0,
        }
    }

    pub(crate) fn insert<F>(&mut self, key: K, value: V, compare: &F) -> Option<V>
    where
        F: Fn(&K, &K) -> Ordering,
    {
        let ordering = match &self.0 {
            Some(node) => compare(&key, &node.key),
            None => {
                self.0 = Some(Box::new(Node::leaf(key, value)));
                return None;
            }
        };

        // SAFETY: The branch was matched as occupied above.
        let node = unsafe { self.0.as_mut().unwrap_unchecked() };
        let result = match ordering {
            Ordering::Less => node.left.insert(key, value, compare),
            Ordering::Greater => node.right.insert(key, value, compare),
            // An equal key only replaces the value, so no rebalancing is needed.
            Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
        };

        self.rebalance();
        result
    }

    pub(crate) fn remove_entry<F>(&mut self, key: &K, compare: &F) -> Option<(K, V)>
    where
        F: Fn(&K, &K) -> Ordering,
    {
        let ordering = match &self.0 {
            Some(node) => compare(key, &node.key),
            None => return None,
        };

        let result = if ordering == Ordering::Equal {
            Some(self.take_entry())
        } else {
            // SAFETY: The branch was matched as occupied above.
            let node = unsafe { self.0.as_mut().unwrap_unchecked() };
            match ordering {
                Ordering::Less => node.left.remove_entry(key, compare),
                _ => node.right.remove_entry(key, compare),
            }
        };

        self.rebalance();
        result
    }

    /// Detaches this branch's entry, reshaping the subtree to keep the search order intact. With
    /// at most one child the child branch is spliced into place; with two, the in-order
    /// successor's entry is moved up into this node instead.
    fn take_entry(&mut self) -> (K, V) {
        // SAFETY: Only called on a branch already matched as occupied.
        let node = unsafe { self.0.as_mut().unwrap_unchecked() };

        match (node.left.0.is_some(), node.right.0.is_some()) {
            (true, true) => {
                // SAFETY: The right branch was just matched as occupied, so it has a first
                // entry. take_first_entry rebalances the path it unlinks from.
                let (succ_key, succ_value) =
                    unsafe { node.right.take_first_entry().unwrap_unchecked() };

                let key = mem::replace(&mut node.key, succ_key);
                let value = mem::replace(&mut node.value, succ_value);
                (key, value)
            }
            (true, false) => {
                let left = mem::take(&mut node.left.0);
                // SAFETY: The branch was matched as occupied above.
                let taken = unsafe { mem::replace(&mut self.0, left).unwrap_unchecked() };
                taken.into_entry()
            }
            (false, _) => {
                let right = mem::take(&mut node.right.0);
                // SAFETY: The branch was matched as occupied above.
                let taken = unsafe { mem::replace(&mut self.0, right).unwrap_unchecked() };
                taken.into_entry()
            }
        }
    }

    pub(crate) fn take_first_entry(&mut self) -> Option<(K, V)> {
        let node = self.0.as_mut()?;

        if node.left.0.is_none() {
            let right = mem::take(&mut node.right.0);
            // SAFETY: The branch was matched as occupied above.
            let taken = unsafe { mem::replace(&mut self.0, right).unwrap_unchecked() };
            return Some(taken.into_entry());
        }

        let result = node.left.take_first_entry();
        self.rebalance();
        result
    }

    /// Recomputes this node's height and applies at most one single or double rotation to
    /// restore the AVL balance bound. The rotation case is picked from the balance factor of
    /// the taller child, which covers both a fresh insertion below it and a shortened sibling.
    fn rebalance(&mut self) {
        let node = match &mut self.0 {
            Some(node) => node,
            None => return,
        };

        node.update_height();
        let balance = node.balance();

        if balance > 1 {
            if node.left.balance() < 0 {
                node.left.rotate_left();
            }
            self.rotate_right();
        } else if balance < -1 {
            if node.right.balance() > 0 {
                node.right.rotate_right();
            }
            self.rotate_left();
        }
    }

    /// Lifts the left child into this branch's slot, demoting the current node to its right
    /// child. The pivot's old right subtree moves across to fill the vacated left branch.
    fn rotate_right(&mut self) {
        let mut node = match mem::take(&mut self.0) {
            Some(node) => node,
            None => return,
        };
        let mut pivot = match mem::take(&mut node.left.0) {
            Some(pivot) => pivot,
            None => {
                self.0 = Some(node);
                return;
            }
        };

        node.left.0 = mem::take(&mut pivot.right.0);
        node.update_height();
        pivot.right.0 = Some(node);
        pivot.update_height();
        self.0 = Some(pivot);
    }

    /// The mirror image of [`Branch::rotate_right`].
    fn rotate_left(&mut self) {
        let mut node = match mem::take(&mut self.0) {
            Some(node) => node,
            None => return,
        };
        let mut pivot = match mem::take(&mut node.right.0) {
            Some(pivot) => pivot,
            None => {
                self.0 = Some(node);
                return;
            }
        };

        node.right.0 = mem::take(&mut pivot.left.0);
        node.update_height();
        pivot.left.0 = Some(node);
        pivot.update_height();
        self.0 = Some(pivot);
    }
}

impl<K: Clone, V: Clone> Clone for Branch<K, V> {
    fn clone(&self) -> Self {
        Branch(self.0.as_ref().map(|node| {
            Box::new(Node {
                left: node.left.clone(),
                right: node.right.clone(),
                height: node.height,
                key: node.key.clone(),
                value: node.value.clone(),
            })
        }))
    }
}

impl<K: Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}: {:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vector<_>>()
                    .join("\n"),
                node.key,
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vector<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
