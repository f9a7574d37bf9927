//! A module containing [`Vector`] and associated types.
//!
//! [`IntoIter`] provides owned iteration; borrowed iteration comes from [`std::slice`] through
//! `Deref`. [`Vector`] is also re-exported under the parent module.

mod iter;
mod vector;

pub use iter::*;
pub use vector::*;
