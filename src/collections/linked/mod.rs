//! Linked collection types: the LIFO [`Stack`] and the FIFO [`Queue`]. Both own one node
//! allocation per element, linked exclusively by the container.

pub mod queue;
pub mod stack;

#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
