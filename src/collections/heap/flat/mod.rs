//! A module containing [`FlatHeap`].

mod flat_heap;
mod tests;

pub use flat_heap::*;
