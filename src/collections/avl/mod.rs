//! A module containing [`AvlTree`] and its iterators.

mod avl_tree;
mod iter;
mod node;
mod tests;

pub use avl_tree::*;
pub use iter::*;
