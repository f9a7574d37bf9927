//! Binary heaps over a caller-supplied ordering.
//!
//! Both variants share one contract: the comparator `compare(a, b)` returns true when `a` must
//! sit further from the root than `b`. A greater-than comparator therefore produces a min-heap
//! and a less-than comparator a max-heap.
//!
//! [`FlatHeap`] stores its elements inline in one contiguous allocation and moves them by value
//! while sifting, so each exchange costs proportionally to `size_of::<T>()`. [`BoxedHeap`]
//! allocates every element separately and exchanges the pointers instead, keeping exchanges O(1)
//! regardless of element size at the price of one allocation per element.

pub mod boxed;
pub mod flat;
pub(crate) mod sift;

#[doc(inline)]
pub use boxed::BoxedHeap;
#[doc(inline)]
pub use flat::FlatHeap;

/// The ordering captured by [`FlatHeap::min_heap`] and [`BoxedHeap::min_heap`]: the greater
/// element is displaced away from the root, so the smallest value surfaces at the top.
pub fn min_heap_order<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

/// The ordering captured by [`FlatHeap::max_heap`] and [`BoxedHeap::max_heap`]: the lesser
/// element is displaced away from the root, so the greatest value surfaces at the top.
pub fn max_heap_order<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}
