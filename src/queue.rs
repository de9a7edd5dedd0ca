//! Heap algorithms over any indexable priority-queue storage.
//!
//! A type implementing [`PriorityQueue`] only describes its storage: how many
//! slots it has, how two slots compare, how to swap them and how to grow or
//! shrink at the tail. The free functions in this module turn that storage
//! into a binary heap laid out as a complete tree, with the root at index `0`,
//! the children of `i` at `2i + 1` and `2i + 2` and the parent of `i` at
//! `(i - 1) / 2`.
//!
//! [`BinaryHeap`](crate::BinaryHeap) runs every one of its operations through
//! these functions.
//!
//! # Examples
//!
//! ```
//! use sift_heap::queue::{self, PriorityQueue};
//!
//! struct Scores(Vec<u32>);
//!
//! impl PriorityQueue for Scores {
//!     type Item = u32;
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn less(&self, i: usize, j: usize) -> bool {
//!         self.0[i] > self.0[j]
//!     }
//!     fn swap(&mut self, i: usize, j: usize) {
//!         self.0.swap(i, j)
//!     }
//!     fn push(&mut self, item: u32) {
//!         self.0.push(item)
//!     }
//!     fn pop(&mut self) -> Option<u32> {
//!         self.0.pop()
//!     }
//! }
//!
//! let mut scores = Scores(vec![9, 31, 40, 22, 10, 15, 1, 25, 91]);
//! queue::init(&mut scores);
//! assert_eq!(scores.0, [91, 31, 40, 25, 10, 15, 1, 9, 22]);
//!
//! assert_eq!(queue::pop(&mut scores), Some(91));
//! queue::push(&mut scores, 50);
//! assert_eq!(scores.0, [50, 40, 22, 31, 10, 15, 1, 9, 25]);
//! ```

/// Storage that the heap algorithms in this module can drive.
///
/// `push` and `pop` act on the tail only; they must not reorder anything.
pub trait PriorityQueue {
    type Item;

    /// Number of occupied slots.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether slot `i` must sit strictly closer to the root than slot `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);

    /// Append `item` as slot `len()`.
    fn push(&mut self, item: Self::Item);

    /// Remove and return the last slot.
    fn pop(&mut self) -> Option<Self::Item>;
}

/// Establishes the heap property over the whole queue.
///
/// Sifts down every non-leaf, from the last one (`(n - 2) / 2`) back to the
/// root. This is *O*(*n*); pushing the elements one at a time would cost
/// *O*(*n* log *n*).
pub fn init<Q: PriorityQueue + ?Sized>(q: &mut Q) {
    let n = q.len();
    if n < 2 {
        return;
    }
    let mut i = (n - 2) / 2 + 1;
    while i > 0 {
        i -= 1;
        sift_down(q, i, n);
    }
}

/// Appends `item` and sifts it up into place. *O*(log *n*).
pub fn push<Q: PriorityQueue + ?Sized>(q: &mut Q, item: Q::Item) {
    q.push(item);
    let last = q.len() - 1;
    sift_up(q, last);
}

/// Removes and returns the root, or `None` if the queue is empty.
/// *O*(log *n*).
///
/// The root is swapped with the last slot, the last slot is popped and the
/// element now at the root is sifted down over the remaining `n - 1` slots.
pub fn pop<Q: PriorityQueue + ?Sized>(q: &mut Q) -> Option<Q::Item> {
    let n = q.len().checked_sub(1)?;
    q.swap(0, n);
    sift_down(q, 0, n);
    q.pop()
}

/// Removes and returns the element at `index`. *O*(log *n*).
///
/// The element taken from the tail to fill the gap may belong above or below
/// `index`, so both directions are tried and at most one of them moves it.
///
/// # Panics
///
/// Panics if `index >= q.len()`.
pub fn remove<Q: PriorityQueue + ?Sized>(q: &mut Q, index: usize) -> Option<Q::Item> {
    let len = q.len();
    assert!(index < len, "index {index} out of range for heap of length {len}");
    let n = len - 1;
    if n != index {
        q.swap(index, n);
        if !sift_down(q, index, n) {
            sift_up(q, index);
        }
    }
    q.pop()
}

/// Restores the heap property after the element at `index` changed.
/// *O*(log *n*).
///
/// Calling `fix` on a valid heap performs no swaps.
///
/// # Panics
///
/// Panics if `index >= q.len()`.
pub fn fix<Q: PriorityQueue + ?Sized>(q: &mut Q, index: usize) {
    let len = q.len();
    assert!(index < len, "index {index} out of range for heap of length {len}");
    if !sift_down(q, index, len) {
        sift_up(q, index);
    }
}

/// Moves the element at `index` towards the root while it precedes its
/// parent.
pub fn sift_up<Q: PriorityQueue + ?Sized>(q: &mut Q, mut index: usize) {
    while index > 0 {
        let parent = (index - 1) / 2;
        if !q.less(index, parent) {
            break;
        }
        q.swap(index, parent);
        index = parent;
    }
}

/// Moves the element at `start` towards the leaves of the tree formed by
/// slots `0..end`, swapping it with its preferred child until no child
/// precedes it. Slots at or past `end` are ignored.
///
/// The right child is preferred only when it strictly precedes the left one.
///
/// Returns `true` if the element moved.
pub fn sift_down<Q: PriorityQueue + ?Sized>(q: &mut Q, start: usize, end: usize) -> bool {
    let mut pos = start;
    loop {
        let left = 2 * pos + 1;
        if left >= end {
            break;
        }
        let mut child = left;
        let right = left + 1;
        if right < end && q.less(right, left) {
            child = right;
        }
        if !q.less(child, pos) {
            break;
        }
        q.swap(pos, child);
        pos = child;
    }
    pos > start
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Min-ordered storage that counts swaps.
    #[derive(Debug, Default)]
    struct Counted {
        data: Vec<i32>,
        swaps: usize,
    }

    impl Counted {
        fn new(data: Vec<i32>) -> Self {
            Counted { data, swaps: 0 }
        }
    }

    impl PriorityQueue for Counted {
        type Item = i32;

        fn len(&self) -> usize {
            self.data.len()
        }
        fn less(&self, i: usize, j: usize) -> bool {
            self.data[i] < self.data[j]
        }
        fn swap(&mut self, i: usize, j: usize) {
            self.swaps += 1;
            self.data.swap(i, j);
        }
        fn push(&mut self, item: i32) {
            self.data.push(item);
        }
        fn pop(&mut self) -> Option<i32> {
            self.data.pop()
        }
    }

    fn is_heap(q: &Counted) -> bool {
        (1..q.data.len()).all(|i| q.data[(i - 1) / 2] <= q.data[i])
    }

    #[test]
    fn init_builds_min_layout() {
        let mut q = Counted::new(vec![9, 31, 40, 22, 10, 15, 1, 25, 91]);
        init(&mut q);
        assert_eq!(q.data, [1, 10, 9, 22, 31, 15, 40, 25, 91]);
    }

    #[test]
    fn init_small() {
        let mut q = Counted::new(vec![]);
        init(&mut q);
        assert!(q.data.is_empty());

        let mut q = Counted::new(vec![7]);
        init(&mut q);
        assert_eq!(q.data, [7]);

        let mut q = Counted::new(vec![7, 3]);
        init(&mut q);
        assert_eq!(q.data, [3, 7]);
    }

    #[test]
    fn pop_empty() {
        let mut q = Counted::default();
        assert_eq!(pop(&mut q), None);
        assert_eq!(q.swaps, 0);
    }

    #[test]
    fn pop_and_push_follow_min_example() {
        let mut q = Counted::new(vec![9, 31, 40, 22, 10, 15, 1, 25, 91]);
        init(&mut q);
        assert_eq!(pop(&mut q), Some(1));
        assert_eq!(q.data, [9, 10, 15, 22, 31, 91, 40, 25]);
        push(&mut q, 2);
        assert_eq!(q.data, [2, 9, 15, 10, 31, 91, 40, 25, 22]);
    }

    #[test]
    fn sift_down_respects_end() {
        let mut q = Counted::new(vec![5, 1, 0]);
        // only slots 0..2 form the tree, so 0 at index 2 is invisible
        assert!(sift_down(&mut q, 0, 2));
        assert_eq!(q.data, [1, 5, 0]);
        assert!(!sift_down(&mut q, 0, 2));
    }

    #[test]
    fn sift_down_prefers_left_on_tie() {
        let mut q = Counted::new(vec![9, 4, 4]);
        assert!(sift_down(&mut q, 0, 3));
        assert_eq!(q.data, [4, 9, 4]);
    }

    #[test]
    fn remove_last_index_only_pops() {
        let mut q = Counted::new(vec![1, 2, 3]);
        assert_eq!(remove(&mut q, 2), Some(3));
        assert_eq!(q.swaps, 0);
        assert_eq!(q.data, [1, 2]);
    }

    #[test]
    fn remove_repairs_in_either_direction() {
        let heap = vec![0, 10, 1, 11, 12, 2, 3, 13, 14, 15, 16, 4];

        // the tail element 4 lands under 10 and has to move up
        let mut q = Counted::new(heap.clone());
        assert!(is_heap(&q));
        assert_eq!(remove(&mut q, 3), Some(11));
        assert_eq!(q.data, [0, 4, 1, 10, 12, 2, 3, 13, 14, 15, 16]);

        // the tail element 4 lands above 2 and has to move down
        let mut q = Counted::new(heap);
        assert_eq!(remove(&mut q, 2), Some(1));
        assert_eq!(q.data, [0, 10, 2, 11, 12, 4, 3, 13, 14, 15, 16]);
        assert!(is_heap(&q));
    }

    #[test]
    fn fix_without_change_is_noop() {
        let mut q = Counted::new(vec![4, 8, 1, 9, 3, 3, 7]);
        init(&mut q);
        let before = q.data.clone();
        q.swaps = 0;
        for i in 0..q.data.len() {
            fix(&mut q, i);
        }
        assert_eq!(q.swaps, 0);
        assert_eq!(q.data, before);
    }

    #[test]
    fn fix_both_directions() {
        let mut q = Counted::new(vec![1, 5, 2, 6, 7, 3, 4]);
        q.data[4] = 0;
        fix(&mut q, 4);
        assert_eq!(q.data, [0, 1, 2, 6, 5, 3, 4]);

        q.data[0] = 8;
        fix(&mut q, 0);
        assert!(is_heap(&q));
        assert_eq!(q.data, [1, 5, 2, 6, 8, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn remove_out_of_range_panics() {
        let mut q = Counted::new(vec![1]);
        remove(&mut q, 1);
    }

    #[test]
    #[should_panic]
    fn fix_on_empty_panics() {
        let mut q = Counted::default();
        fix(&mut q, 0);
    }
}
