//! A module containing [`Stack`] and its iterators.

mod iter;
mod node;
mod stack;
mod tests;

pub use iter::*;
pub(crate) use node::*;
pub use stack::*;
