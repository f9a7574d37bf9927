use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::ptr;

use super::Vector;
use crate::util::buf::RawBuf;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);
        // SAFETY: self is wrapped in ManuallyDrop, so the buffer is moved into the iterator
        // without being freed or having its elements dropped twice.
        let buf = unsafe { ptr::read(&vec.buf) };

        IntoIter {
            buf,
            start: 0,
            len: vec.len,
        }
    }
}

/// An owned iterator over the elements of a [`Vector`]. See [`Vector::into_iter`]. Borrowed
/// iteration uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
/// [`std::slice`], through `Deref`.
pub struct IntoIter<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) start: usize,
    pub(crate) len: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.start + self.len {
            // SAFETY: The slots between start and start + len hold the values not yet yielded,
            // each of which is dropped exactly once here.
            unsafe { ptr::drop_in_place(self.buf.ptr().add(i).as_ptr()) }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: start always indexes the first remaining initialized slot; the value is read
        // out exactly once before start moves past it.
        let value = unsafe { self.buf.ptr().add(self.start).read() };
        self.start += 1;
        self.len -= 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: start + len indexed the last remaining initialized slot before the decrement,
        // so the read is in bounds and the value is moved out exactly once.
        Some(unsafe { self.buf.ptr().add(self.start + self.len).read() })
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.len
    }
}
