use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::util::buf::RawBuf;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `set` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `erase` | `O(n-i)` |
/// | `reverse` | `O(n)` |
/// | `resize` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
///
/// Read access, `reverse` and borrowed iteration are provided through
/// [`Deref<Target = [T]>`](Deref), so everything [`slice`](prim@slice) offers works on a Vector
/// directly.
pub struct Vector<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the Vector. The capacity is guaranteed to be exactly the
    /// value produced by the most recent capacity manipulation.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    pub const fn new() -> Vector<T> {
        Vector {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values
    /// to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: RawBuf::with_cap(cap),
            len: 0,
        }
    }

    /// Creates a new Vector containing `count` clones of `value`, with capacity equal to the
    /// length.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let vec = Vector::repeat(7_u8, 3);
    /// assert_eq!(&*vec, &[7, 7, 7]);
    /// ```
    pub fn repeat(value: T, count: usize) -> Vector<T>
    where
        T: Clone,
    {
        let mut vec = Vector::with_cap(count);
        for _ in 0..count {
            vec.push(value.clone());
        }

        vec
    }

    /// Push the provided value onto the end of the Vector, doubling the capacity if required.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: The capacity has just been adjusted to make room for the new element.
        unsafe { self.buf.ptr().add(self.len).write(value) }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..5).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;

            // SAFETY: len has just been decremented, so the slot it indexes is initialized. The
            // value is read out and the slot is treated as uninitialized from here on.
            Some(unsafe { self.buf.ptr().add(self.len).read() })
        }
    }

    /// Inserts the provided value at the given index, shifting all elements at or after it one
    /// slot to the right. An index equal to the length appends.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(4, 300);
    /// assert_eq!(&*vec, &[0, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "index {} out of bounds for insertion into collection with {} elements",
            index,
            self.len
        );

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap. The elements at index.. are shifted one slot to the right
        // before the new value is written over the vacated slot.
        unsafe {
            let ptr = self.buf.ptr().add(index);
            ptr::copy(ptr.as_ptr(), ptr.as_ptr().add(1), self.len - index);
            ptr.write(value);
        }

        self.len += 1;
    }

    /// Removes the element at the provided index, shifting all following values left to fill in
    /// the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the slot is initialized. Its value is read out before the tail
        // is shifted left over it.
        unsafe {
            let ptr = self.buf.ptr().add(index);
            let value = ptr.read();
            ptr::copy(ptr.as_ptr().add(1), ptr.as_ptr(), self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes the inclusive index range `begin..=end`, shifting the remainder left. `end` is
    /// clamped to the last index, and the call is a no-op if `begin > end` or `begin` is not
    /// less than the length.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (1..=5).collect();
    /// vec.erase(1, 2);
    /// assert_eq!(&*vec, &[1, 4, 5]);
    /// vec.erase(1, 100);
    /// assert_eq!(&*vec, &[1]);
    /// ```
    pub fn erase(&mut self, begin: usize, end: usize) {
        if begin > end || begin >= self.len {
            return;
        }

        let end = cmp::min(end, self.len - 1);
        let removed = end - begin + 1;

        // SAFETY: begin..=end is in bounds of the initialized prefix. Each removed element is
        // dropped exactly once, then the tail is shifted left into the vacated range.
        unsafe {
            for i in begin..=end {
                ptr::drop_in_place(self.buf.ptr().add(i).as_ptr());
            }
            ptr::copy(
                self.buf.ptr().add(end + 1).as_ptr(),
                self.buf.ptr().add(begin).as_ptr(),
                self.len - end - 1,
            );
        }

        self.len -= removed;
    }

    /// Overwrites the element at the provided index, dropping the previous value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if the index is not less than the length, leaving the Vector
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// assert!(vec.set(1, 100).is_ok());
    /// assert!(vec.set(3, 300).is_err());
    /// assert_eq!(&*vec, &[0, 100, 2]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len;
        match self.deref_mut().get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(IndexOutOfBounds { index, len }),
        }
    }

    /// Resizes the Vector so that both its length and capacity are exactly `new_len`. New slots
    /// are filled with clones of `value`; a truncated tail is dropped.
    ///
    /// # Examples
    /// ```
    /// # use clib_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.resize(5, 9);
    /// assert_eq!(&*vec, &[0, 1, 2, 9, 9]);
    /// vec.resize(2, 9);
    /// assert_eq!(&*vec, &[0, 1]);
    /// assert_eq!(vec.cap(), 2);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len < self.len {
            // Drop the truncated tail before the backing storage shrinks.
            for i in new_len..self.len {
                // SAFETY: Slots below len are initialized and each is dropped exactly once here.
                unsafe { ptr::drop_in_place(self.buf.ptr().add(i).as_ptr()) }
            }
            self.len = new_len;
        }

        self.buf.realloc(new_len);

        while self.len < new_len {
            // SAFETY: len < cap after the reallocation above, so the write is in bounds.
            unsafe { self.buf.ptr().add(self.len).write(value.clone()) }
            self.len += 1;
        }
    }

    /// Ensures there is capacity for at least `extra` elements past the current length. Never
    /// shrinks.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`] or its memory layout size exceeds
    /// [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).expect("Capacity overflow!");

        if new_cap > self.cap() {
            self.buf.realloc(new_cap);
        }
    }

    /// Shrinks the capacity to exactly the current length.
    pub fn shrink_to_fit(&mut self) {
        self.buf.realloc(self.len);
    }

    /// Drops every element, setting the length to 0 without touching the capacity.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            // SAFETY: Slots below len are initialized and each is dropped exactly once, before
            // len is reset.
            unsafe { ptr::drop_in_place(self.buf.ptr().add(i).as_ptr()) }
        }

        self.len = 0;
    }

    /// Exchanges the entire contents of two Vectors in O(1) by swapping metadata only; no
    /// elements are copied or moved.
    pub fn swap_with(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }
}

impl<T> Vector<T> {
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);
        self.buf.realloc(new_cap);
    }

    pub(crate) fn check_index(&self, index: usize) {
        assert!(
            index < self.len,
            "index {} out of bounds for collection with {} elements",
            index,
            self.len
        );
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place; the RawBuf releases the allocation afterwards.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized and the allocation is valid for them.
        unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The first len slots are initialized and the allocation is valid for them. The
        // borrow checker prevents aliased access for the lifetime of the slice.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Produces a fully independent deep copy with its own allocation, preserving the source's
    /// capacity.
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.as_ref())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
