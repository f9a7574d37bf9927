//! A module containing [`Queue`] and its iterators.

mod iter;
mod node;
mod queue;

pub use iter::*;
pub(crate) use node::*;
pub use queue::*;
