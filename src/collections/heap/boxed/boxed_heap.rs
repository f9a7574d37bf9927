use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ptr;
use std::slice;

use super::super::sift::{sift_down, sift_up};
use super::super::{max_heap_order, min_heap_order};
use crate::util::buf::RawBuf;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A binary heap which boxes every element, storing only the pointers contiguously.
///
/// The ordering contract matches [`FlatHeap`](crate::collections::heap::FlatHeap): the
/// comparator `compare(a, b)` returns true when `a` must sit further from the root than `b`.
/// Sift exchanges swap `Box` pointers, so they stay O(1) no matter how large `T` is, at the
/// price of one allocation per element. Prefer this variant when elements are big and
/// insertions frequent.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the BoxedHeap.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(log n)`* |
/// | `pop` | `O(log n)` |
/// | `peek` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `swap_with` | `O(1)` |
/// | `heap_sort` | `O(n log n)` |
///
/// \* If the BoxedHeap doesn't have enough capacity for the new element's pointer, `insert`
/// will take `O(n)` to reallocate.
///
/// # Examples
/// ```
/// # use clib_collections::collections::heap::BoxedHeap;
/// let mut heap = BoxedHeap::min_heap();
/// heap.extend([5, 1, 4, 2, 3]);
///
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.peek(), Some(&3));
/// ```
pub struct BoxedHeap<T, F = fn(&T, &T) -> bool> {
    buf: RawBuf<Box<T>>,
    len: usize,
    compare: F,
}

impl<T: Ord> BoxedHeap<T> {
    /// Creates an empty heap which surfaces its smallest element, using [`T::cmp`](Ord::cmp).
    pub fn min_heap() -> BoxedHeap<T> {
        BoxedHeap::with_comparator(min_heap_order::<T> as fn(&T, &T) -> bool)
    }

    /// Creates an empty heap which surfaces its greatest element, using [`T::cmp`](Ord::cmp).
    pub fn max_heap() -> BoxedHeap<T> {
        BoxedHeap::with_comparator(max_heap_order::<T> as fn(&T, &T) -> bool)
    }
}

impl<T, F: Fn(&T, &T) -> bool> BoxedHeap<T, F> {
    /// Creates an empty heap ordered by the provided comparator. `compare(a, b)` must return
    /// true exactly when `a` has to sit further from the root than `b`.
    pub const fn with_comparator(compare: F) -> BoxedHeap<T, F> {
        BoxedHeap {
            buf: RawBuf::new(),
            len: 0,
            compare,
        }
    }

    /// Creates an empty heap with capacity for exactly `cap` element pointers, ordered by the
    /// provided comparator.
    pub fn with_cap(cap: usize, compare: F) -> BoxedHeap<T, F> {
        BoxedHeap {
            buf: RawBuf::with_cap(cap),
            len: 0,
            compare,
        }
    }

    /// Returns the number of elements in the BoxedHeap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the BoxedHeap's pointer storage.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns true if the BoxedHeap contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at the root, if one exists. This is the most extreme
    /// element under the heap's comparator.
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: The heap is non-empty, so the root slot holds a live Box.
            let slot: &Box<T> = unsafe { self.buf.ptr().as_ref() };
            Some(slot)
        }
    }

    /// Boxes and inserts the provided value, doubling the pointer capacity if required, then
    /// sifts the new pointer up towards the root.
    pub fn insert(&mut self, value: T) {
        if self.len == self.cap() {
            let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);
            self.buf.realloc(new_cap);
        }

        // SAFETY: The capacity has just been adjusted to make room for the new pointer.
        unsafe { self.buf.ptr().add(self.len).write(Box::new(value)) }
        self.len += 1;

        self.sift_up_from(self.len - 1);
    }

    /// Removes and returns the root element, if one exists, unboxing it on the way out. The
    /// last pointer takes the root slot and is sifted down.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: Both slots read here were initialized. The root pointer is read out and the
        // former last pointer is moved over it, so no Box is duplicated or dropped twice.
        let top = unsafe {
            let root = self.buf.ptr();
            let top = root.read();
            if self.len > 0 {
                root.write(root.add(self.len).read());
            }
            top
        };

        self.sift_down_from(0);

        Some(*top)
    }

    /// Drops every element and its box, setting the length to 0 without touching the pointer
    /// capacity or the comparator.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            // SAFETY: Slots below len hold live Boxes and each is dropped exactly once, before
            // len is reset.
            unsafe { ptr::drop_in_place(self.buf.ptr().add(i).as_ptr()) }
        }

        self.len = 0;
    }

    /// Exchanges the entire contents of two BoxedHeaps, comparators included, in O(1) by
    /// swapping metadata only; no elements are copied or moved.
    pub fn swap_with(&mut self, other: &mut BoxedHeap<T, F>) {
        mem::swap(self, other);
    }

    /// Sorts the provided slice in place using a BoxedHeap built from clones of its elements,
    /// in `O(n log n)` time and `O(n)` auxiliary space. The result is ascending under the
    /// comparator's displacement relation; the sort is not stable, and sorting an already
    /// sorted slice leaves it unchanged. A subrange can be sorted by slicing first.
    pub fn heap_sort(values: &mut [T], compare: F)
    where
        T: Clone,
    {
        let mut heap = BoxedHeap::with_cap(values.len(), compare);
        for value in values.iter() {
            heap.insert(value.clone());
        }

        for slot in values.iter_mut() {
            // The heap holds exactly as many elements as the slice.
            if let Some(value) = heap.pop() {
                *slot = value;
            }
        }
    }
}

impl<T, F: Fn(&T, &T) -> bool> BoxedHeap<T, F> {
    fn contents(&self) -> &[Box<T>] {
        // SAFETY: The first len slots are initialized and the allocation is valid for them.
        unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) }
    }

    fn sift_up_from(&mut self, child: usize) {
        let ptr = self.buf.ptr().as_ptr();
        // SAFETY: The first len slots are initialized, and the buffer is disjoint from the
        // comparator field borrowed alongside it.
        let heap = unsafe { slice::from_raw_parts_mut(ptr, self.len) };
        let compare = &self.compare;
        sift_up(heap, child, &|a: &Box<T>, b: &Box<T>| compare(&**a, &**b));
    }

    fn sift_down_from(&mut self, parent: usize) {
        let ptr = self.buf.ptr().as_ptr();
        // SAFETY: As above.
        let heap = unsafe { slice::from_raw_parts_mut(ptr, self.len) };
        let compare = &self.compare;
        sift_down(heap, parent, &|a: &Box<T>, b: &Box<T>| compare(&**a, &**b));
    }
}

impl<T: Ord> Default for BoxedHeap<T> {
    fn default() -> Self {
        Self::min_heap()
    }
}

impl<T, F> Drop for BoxedHeap<T, F> {
    fn drop(&mut self) {
        for i in 0..self.len {
            // SAFETY: Slots below len hold live Boxes and each is dropped exactly once. The
            // RawBuf releases the pointer storage afterwards.
            unsafe { ptr::drop_in_place(self.buf.ptr().add(i).as_ptr()) }
        }
    }
}

impl<T, F: Fn(&T, &T) -> bool> Extend<T> for BoxedHeap<T, F> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BoxedHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut heap = BoxedHeap::min_heap();
        heap.extend(value);
        heap
    }
}

impl<T: Clone, F: Fn(&T, &T) -> bool + Clone> Clone for BoxedHeap<T, F> {
    /// Produces a fully independent deep copy, cloning each element into a fresh box in the
    /// existing slot order so the heap arrangement carries over without re-sifting.
    fn clone(&self) -> Self {
        let mut heap = BoxedHeap::with_cap(self.cap(), self.compare.clone());

        for (i, value) in self.contents().iter().enumerate() {
            // SAFETY: i < len <= cap, so the write is in bounds. len tracks each write so a
            // panicking clone can't leak or double-drop.
            unsafe { heap.buf.ptr().add(i).write(value.clone()) }
            heap.len = i + 1;
        }

        heap
    }
}

impl<T: Debug, F> Debug for BoxedHeap<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // SAFETY: The first len slots are initialized.
        let contents = unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) };

        f.debug_struct("BoxedHeap")
            .field("contents", &contents)
            .field("len", &self.len)
            .field("cap", &self.buf.cap())
            .finish()
    }
}
