use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, Queue};

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            node: self.head,
            remaining: self.len,
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over a [`Queue`], from head to tail. See [`Queue::iter`].
pub struct Iter<'a, T> {
    node: Link<T>,
    remaining: usize,
    _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.node?;
        // SAFETY: The node is owned by the queue, which is borrowed for 'a and can't be mutated
        // while this iterator exists.
        let node = unsafe { ptr.0.as_ref() };
        self.node = node.next;
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owned iterator over a [`Queue`], popping from the head.
pub struct IntoIter<T>(Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
