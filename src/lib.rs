//! Array-backed binary heaps with a pluggable ordering.
//!
//! [`BinaryHeap`] keeps its elements in a `Vec` laid out as a complete binary
//! tree and supports in-place construction ([`build`]), insertion
//! ([`push`]), root removal ([`remove_root`]), removal at an arbitrary index
//! ([`remove_at`]) and repair after an element was changed ([`fix_at`]).
//!
//! The ordering is a type parameter: [`MinHeap`] keeps the smallest element at
//! the root, [`MaxHeap`] the greatest, and [`FnOrder`] accepts any comparator.
//!
//! All of the maintenance work is done by the generic functions in [`queue`],
//! which can also drive user-defined storage through the [`PriorityQueue`]
//! trait.
//!
//! ```
//! use sift_heap::MaxHeap;
//!
//! let mut heap = MaxHeap::from(vec![9, 31, 40, 22, 10, 15, 1, 25, 91]);
//!
//! let mut drained = Vec::new();
//! while let Ok(root) = heap.remove_root() {
//!     drained.push(root);
//! }
//! assert_eq!(drained, [91, 40, 31, 25, 22, 15, 10, 9, 1]);
//! ```
//!
//! [`build`]: BinaryHeap::build
//! [`push`]: BinaryHeap::push
//! [`remove_root`]: BinaryHeap::remove_root
//! [`remove_at`]: BinaryHeap::remove_at
//! [`fix_at`]: BinaryHeap::fix_at
//! [`PriorityQueue`]: queue::PriorityQueue

#![allow(missing_docs)]

mod error;
mod heap;
mod order;
pub mod queue;

pub use error::{HeapError, Result};
pub use heap::{BinaryHeap, IntoIterSorted, Iter, MaxHeap, MinHeap};
pub use order::{FnOrder, HeapOrder, MaxOrder, MinOrder};
