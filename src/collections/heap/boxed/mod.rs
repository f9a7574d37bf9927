//! A module containing [`BoxedHeap`].

mod boxed_heap;
mod tests;

pub use boxed_heap::*;
