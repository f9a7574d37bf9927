//! Various general-purpose collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut),
//! which saves writing some of the more repetitive functionality. The node-based types instead
//! expose borrowing iterators over their natural traversal order.

pub mod avl;
pub mod contiguous;
pub mod heap;
pub mod linked;
