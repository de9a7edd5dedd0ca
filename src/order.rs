//! Orderings that decide which element of a pair belongs nearer the root.

use core::cmp::Ordering;
use core::fmt;

/// An ordering predicate for a binary heap.
///
/// `precedes(a, b)` returns `true` when `a` must sit strictly closer to the
/// root than `b`. A heap is valid when no child precedes its parent, so equal
/// elements never force a swap.
pub trait HeapOrder<T: ?Sized> {
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Smallest element at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinOrder;

/// Greatest element at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> HeapOrder<T> for MinOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: Ord + ?Sized> HeapOrder<T> for MaxOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// An ordering backed by a comparator closure.
///
/// Elements comparing as [`Ordering::Less`] move towards the root, so
/// `FnOrder::new(i32::cmp)` behaves like [`MinOrder`].
///
/// ```
/// use sift_heap::{BinaryHeap, FnOrder};
///
/// // order by distance from 10
/// let mut heap = BinaryHeap::with_order(FnOrder::new(|a: &i32, b: &i32| {
///     (a - 10).abs().cmp(&(b - 10).abs())
/// }));
/// heap.extend([1, 25, 9, 14]);
/// assert_eq!(heap.remove_root(), Ok(9));
/// assert_eq!(heap.remove_root(), Ok(14));
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<F> {
    cmp: F,
}

impl<F> FnOrder<F> {
    pub fn new(cmp: F) -> Self {
        FnOrder { cmp }
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOrder").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> HeapOrder<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.cmp)(a, b) == Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_and_max_are_strict() {
        assert!(MinOrder.precedes(&1, &2));
        assert!(!MinOrder.precedes(&2, &2));
        assert!(MaxOrder.precedes(&2, &1));
        assert!(!MaxOrder.precedes(&2, &2));
    }

    #[test]
    fn fn_order_follows_comparator() {
        let rev = FnOrder::new(|a: &u8, b: &u8| b.cmp(a));
        assert!(rev.precedes(&9, &3));
        assert!(!rev.precedes(&3, &9));
        assert!(!rev.precedes(&3, &3));
    }
}
