use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::iter::Iter;
use super::{Link, Node, NodePtr};

/// A singly-linked FIFO queue with head and tail pointers, giving O(1) push and pop.
///
/// The head chain owns every node; the tail pointer only aliases the last of them so that a push
/// doesn't have to walk the whole list.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `head` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `swap_with` | `O(1)` |
pub struct Queue<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements.
    pub const fn new() -> Queue<T> {
        Queue {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends the provided value at the tail of the Queue.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::linked::Queue;
    /// let mut queue = Queue::new();
    /// queue.push('a');
    /// queue.push('b');
    /// assert_eq!(queue.head(), Some(&'a'));
    /// ```
    pub fn push(&mut self, value: T) {
        let node = NodePtr::from_node(Node { value, next: None });

        match &mut self.tail {
            Some(tail) => {
                *tail.next_mut() = Some(node);
                *tail = node;
            }
            None => {
                // Empty queue: head and tail both come to point at the one node.
                self.head = Some(node);
                self.tail = Some(node);
            }
        }

        self.len += 1;
    }

    /// Removes the value at the head of the Queue, returning it if one exists. Popping the last
    /// element resets the head and tail pointers together.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::linked::Queue;
    /// let mut queue: Queue<_> = ['a', 'b', 'c'].into_iter().collect();
    /// assert_eq!(queue.pop(), Some('a'));
    /// assert_eq!(queue.pop(), Some('b'));
    /// assert_eq!(queue.pop(), Some('c'));
    /// assert_eq!(queue.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head.take()?;
        // SAFETY: head was unlinked by the take above and no other copy of the pointer survives:
        // tail is cleared below in the one-node case, where it aliased head.
        let node = unsafe { head.take_node() };

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Returns a reference to the value at the head of the Queue without removing it, if one
    /// exists.
    pub fn head(&self) -> Option<&T> {
        match &self.head {
            Some(node) => Some(node.value()),
            None => None,
        }
    }

    /// Returns a mutable reference to the value at the head of the Queue, if one exists.
    pub fn head_mut(&mut self) -> Option<&mut T> {
        match &mut self.head {
            Some(node) => Some(node.value_mut()),
            None => None,
        }
    }

    /// Frees every node in one linear pass, leaving the Queue empty.
    pub fn clear(&mut self) {
        while let Some(head) = self.head.take() {
            // SAFETY: Each node is unlinked before being taken, and the aliasing tail pointer is
            // cleared below before anything else can observe it.
            let node = unsafe { head.take_node() };
            self.head = node.next;
        }

        self.tail = None;
        self.len = 0;
    }

    /// Exchanges the entire contents of two Queues in O(1) by swapping the head and tail
    /// pointers and lengths only; no elements are copied.
    pub fn swap_with(&mut self, other: &mut Queue<T>) {
        mem::swap(self, other);
    }

    /// Returns a borrowing iterator over the Queue's elements, from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Queue<T> {
    /// Rebuilds the Queue by replaying a push of every source element in order. The clone always
    /// holds every element of the source; allocation failure aborts rather than producing a
    /// partial copy.
    fn clone(&self) -> Self {
        let mut copy = Queue::new();

        for value in self.iter() {
            copy.push(value.clone());
        }

        copy
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(value);
        queue
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugContents(self))
            .field("len", &self.len)
            .finish()
    }
}

struct DebugContents<'a, T>(&'a Queue<T>);

impl<T: Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// SAFETY: The queue exclusively owns its nodes, so it is safe to send when T is.
unsafe impl<T: Send> Send for Queue<T> {}
// SAFETY: The queue's safe API provides no interior mutability, so it can be shared when T can.
unsafe impl<T: Sync> Sync for Queue<T> {}
