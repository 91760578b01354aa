use thiserror::Error;

/// Error types for `DynamicArrayList` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ListError {
    /// Requested initial capacity is negative
    #[error("Invalid argument: illegal initial capacity {capacity}")]
    InvalidArgument {
        /// Capacity that was requested
        capacity: isize,
    },
    /// Index is outside `[0, length)` for `get`, `set` or positional `remove`
    #[error("Index out of range: index {index}, current length {length}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the list
        length: usize,
    },
    /// Insertion index is outside `[0, length]` for positional `add_at`
    #[error("Boundary fault: insertion index {index} outside of [0, {length}]")]
    BoundaryFault {
        /// Index that was requested for insertion
        index: usize,
        /// Current length of the list
        length: usize,
    },
}

pub type Result<T> = core::result::Result<T, ListError>;
