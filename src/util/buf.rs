use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A raw allocation with room for `cap` values of `T`, with no tracking of which slots are
/// initialized. Collections built on top of this type are responsible for dropping their own
/// elements; the buffer only manages the allocation itself.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Creates a buffer with capacity 0 and no allocation behind it.
    pub(crate) const fn new() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a buffer with capacity for exactly `cap` values, all uninitialized.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub(crate) fn with_cap(cap: usize) -> RawBuf<T> {
        let mut buf = RawBuf::new();
        buf.realloc(cap);
        buf
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    pub(crate) const fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// A helper function to create a [`Layout`] containing `cap` elements of type `T`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("Capacity overflow!")
    }

    /// Reallocates the buffer to hold exactly `new_cap` values. Slots below the smaller of the
    /// old and new capacities keep their bytes; anything past that is uninitialized. Callers
    /// must drop any initialized values above `new_cap` before shrinking.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        if size_of::<T>() == 0 {
            // Zero-sized types are never actually allocated, only the recorded capacity changes.
            self.cap = new_cap;
            return;
        }

        let new_ptr = match (self.cap, new_cap) {
            (old, new) if old == new => return,
            (0, _) => {
                let layout = Self::make_layout(new_cap);
                // SAFETY: The layout has non-zero size, because a zero capacity and a zero-sized
                // T are both handled above.
                let raw: *mut T = unsafe { alloc::alloc(layout).cast() };

                NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(layout))
            }
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with this exact layout, and
                // is replaced with a dangling pointer below.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.cap)) };

                NonNull::dangling()
            }
            (_, _) => {
                let old_layout = Self::make_layout(self.cap);
                let new_layout = Self::make_layout(new_cap);
                // SAFETY: ptr was allocated in the global allocator with old_layout, and the new
                // size is non-zero and no greater than isize::MAX, as checked by make_layout.
                let raw: *mut T = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            }
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

// SAFETY: A RawBuf is an exclusively owned allocation, so it is safe to send when T is.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: RawBuf provides no interior mutability, so it can be shared when T can.
unsafe impl<T: Sync> Sync for RawBuf<T> {}
