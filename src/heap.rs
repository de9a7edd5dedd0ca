use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use std::slice;

use log::{debug, trace};

use crate::error::{HeapError, Result};
use crate::order::{HeapOrder, MaxOrder, MinOrder};
use crate::queue::{self, PriorityQueue};

/// A binary heap over a contiguous vector, ordered by `O`.
///
/// The element that `O` ranks first sits at index `0`; the children of index
/// `i` sit at `2i + 1` and `2i + 2`. With the default [`MaxOrder`] this is a
/// max-heap, [`MinHeap`] flips it.
///
/// Apart from the read-only snapshot returned by [`as_slice`], the contents
/// only change through the methods on this type. An element modified through
/// [`get_mut`] leaves the heap unordered until [`fix_at`] is called for the
/// same index.
///
/// # Examples
///
/// ```
/// use sift_heap::MaxHeap;
///
/// let mut heap = MaxHeap::from(vec![9, 31, 40, 22, 10, 15, 1, 25, 91]);
/// assert_eq!(heap.as_slice(), [91, 31, 40, 25, 10, 15, 1, 9, 22]);
///
/// assert_eq!(heap.remove_root(), Ok(91));
/// assert_eq!(heap.as_slice(), [40, 31, 22, 25, 10, 15, 1, 9]);
///
/// heap.push(50);
/// assert_eq!(heap.as_slice(), [50, 40, 22, 31, 10, 15, 1, 9, 25]);
/// ```
///
/// ## Min-heap
///
/// ```
/// use sift_heap::MinHeap;
///
/// let mut heap = MinHeap::from(vec![9, 31, 40, 22, 10, 15, 1, 25, 91]);
/// assert_eq!(heap.as_slice(), [1, 10, 9, 22, 31, 15, 40, 25, 91]);
///
/// heap.push(2);
/// assert_eq!(heap.peek(), Some(&1));
/// ```
///
/// # Time complexity
///
/// | [build] | [push]        | [remove_root] | [remove_at]   | [fix_at]      |
/// |---------|---------------|---------------|---------------|---------------|
/// | *O*(*n*)  | *O*(log(*n*)) | *O*(log(*n*)) | *O*(log(*n*)) | *O*(log(*n*)) |
///
/// [`as_slice`]: BinaryHeap::as_slice
/// [`get_mut`]: BinaryHeap::get_mut
/// [`fix_at`]: BinaryHeap::fix_at
/// [build]: BinaryHeap::build
/// [push]: BinaryHeap::push
/// [remove_root]: BinaryHeap::remove_root
/// [remove_at]: BinaryHeap::remove_at
/// [fix_at]: BinaryHeap::fix_at
#[derive(Clone)]
pub struct BinaryHeap<T, O = MaxOrder> {
    data: Vec<T>,
    order: O,
}

/// A heap with the smallest element at the root.
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

/// A heap with the greatest element at the root.
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

/// The heap's storage seen as a [`PriorityQueue`], so the shared algorithms
/// in [`queue`] can drive it.
struct Raw<'a, T, O> {
    data: &'a mut Vec<T>,
    order: &'a O,
}

impl<T, O: HeapOrder<T>> PriorityQueue for Raw<'_, T, O> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.order.precedes(&self.data[i], &self.data[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j)
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.data.push(item)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }
}

impl<T, O: Default> BinaryHeap<T, O> {
    /// Creates an empty heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        BinaryHeap {
            data: Vec::new(),
            order: O::default(),
        }
    }

    /// Creates an empty heap with space for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeap {
            data: Vec::with_capacity(capacity),
            order: O::default(),
        }
    }
}

impl<T, O> BinaryHeap<T, O> {
    /// Creates an empty heap ordered by `order`.
    #[must_use]
    pub fn with_order(order: O) -> Self {
        BinaryHeap {
            data: Vec::new(),
            order,
        }
    }

    /// The ordering this heap was created with.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the backing storage in heap layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::MaxHeap;
    /// let heap = MaxHeap::from([3, 1, 2]);
    /// assert_eq!(heap.as_slice(), [3, 1, 2]);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the root, or `None` if the heap is empty.
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Returns an iterator over the elements in heap layout order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::MinHeap;
    /// let heap = MinHeap::from([4, 2, 3, 1]);
    ///
    /// assert_eq!(heap.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.data.iter(),
        }
    }

    /// Consumes the heap and returns the backing vector in heap layout.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Drops all elements from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn raw(&mut self) -> Raw<'_, T, O> {
        Raw {
            data: &mut self.data,
            order: &self.order,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            debug!("rejecting index {} on heap of length {}", index, len);
            Err(HeapError::out_of_range(index, len))
        }
    }
}

impl<T, O: HeapOrder<T> + Default> BinaryHeap<T, O> {
    /// Builds a heap from an arbitrary vector, reusing its allocation.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self::new();
        heap.build(data);
        heap
    }
}

impl<T, O: HeapOrder<T>> BinaryHeap<T, O> {
    /// Replaces the contents of the heap with `data` and heapifies it in
    /// place.
    ///
    /// Every non-leaf is sifted down, starting from the last one, which costs
    /// *O*(*n*) in total.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::MaxHeap;
    ///
    /// let mut heap = MaxHeap::new();
    /// heap.push(1000);
    ///
    /// heap.build(vec![9, 31, 40, 22, 10, 15, 1, 25, 91]);
    /// assert_eq!(heap.as_slice(), [91, 31, 40, 25, 10, 15, 1, 9, 22]);
    /// ```
    pub fn build(&mut self, data: Vec<T>) {
        debug!("building heap from {} elements", data.len());
        self.data = data;
        queue::init(&mut self.raw());
    }

    /// Pushes an item onto the heap.
    ///
    /// The item is appended as the last leaf and sifted up while it precedes
    /// its parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::MaxHeap;
    /// let mut heap = MaxHeap::new();
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) swaps, plus the amortized cost of growing the vector.
    pub fn push(&mut self, item: T) {
        queue::push(&mut self.raw(), item);
    }

    /// Removes the root and returns it.
    ///
    /// The root trades places with the last element, the vector shrinks by
    /// one and the new root is sifted down.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if there is nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::{HeapError, MinHeap};
    /// let mut heap = MinHeap::from([3, 1]);
    ///
    /// assert_eq!(heap.remove_root(), Ok(1));
    /// assert_eq!(heap.remove_root(), Ok(3));
    /// assert_eq!(heap.remove_root(), Err(HeapError::Empty));
    /// ```
    pub fn remove_root(&mut self) -> Result<T> {
        if self.is_empty() {
            debug!("remove_root on empty heap");
            return Err(HeapError::Empty);
        }
        queue::pop(&mut self.raw()).ok_or(HeapError::Empty)
    }

    /// Removes the element at `index` and returns it.
    ///
    /// The last element fills the gap and is then sifted down, or up if
    /// sifting down left it in place.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] on an empty heap and
    /// [`HeapError::IndexOutOfRange`] if `index >= self.len()`. The heap is
    /// left untouched in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::MaxHeap;
    /// let mut heap = MaxHeap::from(vec![50, 31, 40, 25, 10, 15, 1, 9]);
    ///
    /// assert_eq!(heap.remove_at(4), Ok(10));
    /// assert_eq!(heap.as_slice(), [50, 31, 40, 25, 9, 15, 1]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            debug!("remove_at({}) on empty heap", index);
            return Err(HeapError::Empty);
        }
        self.check_index(index)?;
        trace!("removing index {} of {}", index, self.len());
        queue::remove(&mut self.raw(), index).ok_or(HeapError::Empty)
    }

    /// Restores the heap property after the element at `index` was modified,
    /// typically through [`get_mut`](BinaryHeap::get_mut).
    ///
    /// Sifts down and, if that moved nothing, sifts up. On a heap that is
    /// already valid this performs no swaps.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::MaxHeap;
    /// let mut heap = MaxHeap::from(vec![40, 31, 22, 25, 10, 15, 1, 9]);
    ///
    /// if let Some(item) = heap.get_mut(2) {
    ///     *item = 50;
    /// }
    /// heap.fix_at(2).unwrap();
    /// assert_eq!(heap.as_slice(), [50, 31, 40, 25, 10, 15, 1, 9]);
    /// ```
    pub fn fix_at(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        trace!("fixing index {} of {}", index, self.len());
        queue::fix(&mut self.raw(), index);
        Ok(())
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Changing the element may break the heap property; call
    /// [`fix_at`](BinaryHeap::fix_at) with the same index before any other
    /// operation.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Replaces the element at `index` with `item`, repairs the heap and
    /// returns the old element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfRange`] if `index >= self.len()`;
    /// `item` is dropped in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::MinHeap;
    /// let mut heap = MinHeap::from([1, 5, 2, 6, 7]);
    ///
    /// assert_eq!(heap.replace_at(4, 0), Ok(7));
    /// assert_eq!(heap.peek(), Some(&0));
    /// ```
    pub fn replace_at(&mut self, index: usize, item: T) -> Result<T> {
        self.check_index(index)?;
        trace!("replacing index {} of {}", index, self.len());
        let old = mem::replace(&mut self.data[index], item);
        queue::fix(&mut self.raw(), index);
        Ok(old)
    }

    /// Checks that no element precedes its parent.
    pub fn check_integrity(&self) -> bool {
        (1..self.data.len())
            .all(|i| !self.order.precedes(&self.data[i], &self.data[(i - 1) / 2]))
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// ```
    /// use sift_heap::MinHeap;
    ///
    /// let mut a = MinHeap::from([-10, 1, 2, 3, 3]);
    /// let mut b = MinHeap::from([-20, 5, 43]);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        self.data.append(&mut other.data);
        queue::init(&mut self.raw());
    }

    /// Consumes the heap and returns its elements in the order
    /// [`remove_root`](BinaryHeap::remove_root) would yield them: ascending for
    /// a min-heap, descending for a max-heap.
    ///
    /// Runs an in-place heapsort, so no extra allocation is made.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::MaxHeap;
    ///
    /// let mut heap = MaxHeap::from([1, 2, 4, 5, 7]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [7, 6, 5, 4, 3, 2, 1]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        let mut raw = self.raw();
        while end > 1 {
            end -= 1;
            raw.swap(0, end);
            queue::sift_down(&mut raw, 0, end);
        }
        self.data.reverse();
        self.data
    }

    /// Returns an iterator which removes elements in heap order.
    /// This method consumes the original heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_heap::MaxHeap;
    /// let heap = MaxHeap::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [5, 4]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, O> {
        IntoIterSorted { inner: self }
    }
}

impl<T, O: Default> Default for BinaryHeap<T, O> {
    /// Creates an empty heap.
    #[inline]
    fn default() -> Self {
        BinaryHeap::new()
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// An iterator over the elements of a `BinaryHeap`, in layout order.
///
/// This `struct` is created by [`BinaryHeap::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator that removes the root of a `BinaryHeap` on every step.
///
/// This `struct` is created by [`BinaryHeap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, O> {
    inner: BinaryHeap<T, O>,
}

impl<T, O: HeapOrder<T>> Iterator for IntoIterSorted<T, O> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.remove_root().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, O: HeapOrder<T>> ExactSizeIterator for IntoIterSorted<T, O> {}

impl<T, O: HeapOrder<T>> FusedIterator for IntoIterSorted<T, O> {}

impl<T, O: HeapOrder<T> + Default> From<Vec<T>> for BinaryHeap<T, O> {
    /// Converts a `Vec<T>` into a heap.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> Self {
        BinaryHeap::from_vec(vec)
    }
}

impl<T, O: HeapOrder<T> + Default, const N: usize> From<[T; N]> for BinaryHeap<T, O> {
    /// ```
    /// use sift_heap::MinHeap;
    ///
    /// let mut h1 = MinHeap::from([1, 4, 2, 3]);
    /// let mut h2: MinHeap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.remove_root().ok().zip(h2.remove_root().ok()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        BinaryHeap::from_vec(Vec::from(arr))
    }
}

impl<T, O> From<BinaryHeap<T, O>> for Vec<T> {
    /// Converts a heap into its backing vector.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: BinaryHeap<T, O>) -> Vec<T> {
        heap.data
    }
}

impl<T, O: HeapOrder<T> + Default> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BinaryHeap::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T, O> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for BinaryHeap<T, O> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |item| self.push(item));
    }
}
