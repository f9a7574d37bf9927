//! A library of general-purpose in-memory containers: a growable [`Vector`], a linked [`Stack`]
//! and [`Queue`], two binary heap variants and a self-balancing ordered map.
//!
//! [`Vector`]: collections::contiguous::Vector
//! [`Stack`]: collections::linked::Stack
//! [`Queue`]: collections::linked::Queue
//!
//! # Purpose
//! These types cover the containers I keep reaching for: contiguous storage with amortized O(1)
//! growth, cheap LIFO/FIFO buffers, priority queues and an ordered map with O(log n) everything.
//! They take a lot of inspiration from [`std`]'s collections without copying them; in fact this
//! crate doesn't use [`Vec`] at all.
//!
//! # Ordering
//! The heaps and the AVL tree order their contents with a comparator captured at construction
//! rather than a trait bound alone, so one element type can live in differently-ordered
//! containers at once. Constructors like
//! [`FlatHeap::min_heap`](collections::heap::FlatHeap::min_heap) and
//! [`AvlTree::new`](collections::avl::AvlTree::new) capture the natural [`Ord`] ordering as the
//! default.
//!
//! # Error Handling
//! For a container library it is more ergonomic for methods to panic on programming errors (an
//! out-of-bounds insertion index, a capacity overflowing the address space) than to force every
//! caller through a [`Result`]. Where a fallible outcome is part of normal operation, methods
//! return [`Option`] or a strongly typed error struct implementing
//! [`Error`](std::error::Error). Allocation failure aborts, as it does in [`std`].
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
