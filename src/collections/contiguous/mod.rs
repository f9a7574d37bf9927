//! Contiguous collection types, currently just [`Vector`].

pub mod vector;

#[doc(inline)]
pub use vector::Vector;
