//! An array-backed binary min-heap.
//!
//! [`MinHeap`] keeps its smallest element at the root. Besides the usual
//! `push`/`pop`/`peek` it supports [`MinHeap::build`], Floyd's bottom-up
//! heap construction, which turns a vector into a heap in `O(n)` instead of
//! the `O(n log n)` of repeated insertion.
//!
//! Capacity grows by doubling when an insertion finds the backing storage
//! full and never shrinks. Duplicate elements are not rejected; callers that
//! need set semantics must deduplicate before inserting.

use core::fmt;

use crate::error::{Error, Result};

/// Backing capacity of a heap created with [`MinHeap::new`].
pub const INITIAL_CAPACITY: usize = 13;

/// A priority queue implemented with a binary min-heap.
///
/// The heap-order invariant: every element is less than or equal to both of
/// its children, wherever those exist. [`MinHeap::pop`] therefore always
/// returns the minimum.
pub struct MinHeap<P> {
    data: Vec<P>,
}

impl<P: Ord> MinHeap<P> {
    /// Creates an empty heap with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty heap that can hold `capacity` elements without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from `items` in `O(n)`.
    ///
    /// The elements are laid out in their given order and then sifted down
    /// from the last parent to the root (Floyd's algorithm). The backing
    /// storage is sized to hold `2n + 1` elements up front.
    pub fn build(items: Vec<P>) -> Self {
        let n = items.len();
        let mut data = Vec::with_capacity(2 * n + 1);
        data.extend(items);
        let mut heap = Self { data };
        for node in (0..n / 2).rev() {
            heap.sift_down(node);
        }
        heap
    }

    /// Inserts `item`, growing the backing storage if it is full.
    pub fn push(&mut self, item: P) {
        if self.data.len() == self.data.capacity() {
            self.data.reserve(self.data.capacity().max(1));
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimum, or [`Error::Empty`].
    ///
    /// The last element replaces the root and sifts down. Capacity is not
    /// reduced.
    pub fn pop(&mut self) -> Result<P> {
        if self.data.is_empty() {
            return Err(Error::Empty);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let item = self.data.pop().ok_or(Error::Empty)?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Returns the minimum without removing it, or [`Error::Empty`].
    pub fn peek(&self) -> Result<&P> {
        self.data.first().ok_or(Error::Empty)
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }
            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.data[a] < self.data[b]
    }
}

impl<P> MinHeap<P> {
    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns how many elements the backing storage can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes every element. Capacity is retained.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<P: Ord> Default for MinHeap<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord> From<Vec<P>> for MinHeap<P> {
    fn from(items: Vec<P>) -> Self {
        Self::build(items)
    }
}

impl<P: Ord> Extend<P> for MinHeap<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<P: fmt::Debug + Ord> fmt::Debug for MinHeap<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.len())
            .field("min", &self.peek().ok())
            .finish()
    }
}

/// Sorts `items` ascending by building a min-heap and draining it.
///
/// `O(n log n)`; the `O(n)` bulk build does not change the asymptotics but
/// halves the constant of the construction phase.
pub fn heap_sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    let mut heap = MinHeap::build(items);
    let mut sorted = Vec::with_capacity(heap.len());
    while let Ok(item) = heap.pop() {
        sorted.push(item);
    }
    sorted
}
