use derive_more::{Display, Error};

/// The error returned when an index argument is not less than the logical element count of the
/// collection it was used with.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The element count of the collection at the time of the call.
    pub len: usize,
}
