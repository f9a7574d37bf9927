use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::Node;
use super::iter::Iter;

/// A singly-linked LIFO stack, with one node allocation per element.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the Stack.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `swap_with` | `O(1)` |
pub struct Stack<T> {
    pub(crate) head: Option<Box<Node<T>>>,
    pub(crate) len: usize,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub const fn new() -> Stack<T> {
        Stack { head: None, len: 0 }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes the provided value onto the top of the Stack.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::linked::Stack;
    /// let mut stack = Stack::new();
    /// stack.push('a');
    /// stack.push('b');
    /// assert_eq!(stack.top(), Some(&'b'));
    /// ```
    pub fn push(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Pops the top of the Stack, returning an owned value if one exists.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::linked::Stack;
    /// let mut stack: Stack<_> = ['a', 'b', 'c'].into_iter().collect();
    /// assert_eq!(stack.pop(), Some('c'));
    /// assert_eq!(stack.pop(), Some('b'));
    /// assert_eq!(stack.pop(), Some('a'));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Returns a reference to the value on top of the Stack, if one exists.
    pub fn top(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the value on top of the Stack, if one exists.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Frees every node in one linear pass, leaving the Stack empty.
    pub fn clear(&mut self) {
        // Unlink iteratively so that dropping a long chain can't overflow the call stack.
        let mut node = self.head.take();
        while let Some(mut boxed) = node {
            node = boxed.next.take();
        }

        self.len = 0;
    }

    /// Exchanges the entire contents of two Stacks in O(1) by swapping the root pointers and
    /// lengths only.
    pub fn swap_with(&mut self, other: &mut Stack<T>) {
        mem::swap(self, other);
    }

    /// Returns a borrowing iterator over the Stack's elements, from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Stack<T> {
    /// Walks the source from top to bottom, deep-cloning each node in the same order, producing
    /// a fully independent list.
    fn clone(&self) -> Self {
        let mut copy = Stack::new();
        let mut tail = &mut copy.head;
        let mut node = self.head.as_deref();

        while let Some(n) = node {
            let boxed = tail.insert(Box::new(Node {
                value: n.value.clone(),
                next: None,
            }));
            tail = &mut boxed.next;
            node = n.next.as_deref();
        }

        copy.len = self.len;
        copy
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(value);
        stack
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &DebugContents(self))
            .field("len", &self.len)
            .finish()
    }
}

struct DebugContents<'a, T>(&'a Stack<T>);

impl<T: Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
