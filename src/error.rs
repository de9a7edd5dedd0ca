use thiserror::Error;

/// Result type for heap operations
pub type Result<T> = std::result::Result<T, HeapError>;

/// Errors raised by the checked [`BinaryHeap`](crate::BinaryHeap) operations.
///
/// A failed operation never touches the backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The operation needs at least one element.
    #[error("heap is empty")]
    Empty,

    /// The index does not address an element of the heap.
    #[error("index {index} out of range for heap of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl HeapError {
    /// Create an out of range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        HeapError::IndexOutOfRange { index, len }
    }
}
