use thiserror::Error;

/// Error types for checked `SlotVec` operations
///
/// Every error is raised before the vector is touched, so a failed call
/// leaves length, capacity and contents unchanged.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SlotVecError {
    /// Element access or removal attempted on a vector with no live elements
    #[error("Empty vector: `{operation}` requires at least one element")]
    EmptyVector {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
}
