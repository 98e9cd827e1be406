//! Common traits for min-heap data structures
//!
//! [`MinHeap`] is the public surface of every heap in this crate: keys go in
//! with `insert`, the smallest is observed with `find_minimum` and removed with
//! `delete_minimum`. The two fallible operations report an empty heap through
//! [`HeapError`] instead of panicking.
//!
//! `peek` and `pop` are provided on top of them for callers that prefer the
//! `Option`-returning shape of `std::collections::BinaryHeap`.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs at least one element but the heap holds none
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-ordered priority queues over an orderable key
///
/// # Example
///
/// ```rust
/// use binomial_heap::{BinomialHeap, HeapError, MinHeap};
///
/// let mut heap = BinomialHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.find_minimum(), Ok(&1));
/// assert_eq!(heap.delete_minimum(), Ok(1));
/// assert_eq!(heap.find_minimum(), Ok(&2));
///
/// heap.clear();
/// assert_eq!(heap.find_minimum(), Err(HeapError::EmptyHeap));
/// ```
pub trait MinHeap<K: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of keys in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    fn insert(&mut self, key: K);

    /// Returns the smallest key without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap holds no keys.
    fn find_minimum(&self) -> Result<&K, HeapError>;

    /// Removes the smallest key and hands it back
    ///
    /// When several keys compare equal to the minimum, which of them is
    /// removed is unspecified.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap holds no keys. The heap is
    /// left unchanged.
    fn delete_minimum(&mut self) -> Result<K, HeapError>;

    /// Returns the smallest key, or `None` when empty
    ///
    /// This is `BinaryHeap::peek`, but for a min-heap.
    fn peek(&self) -> Option<&K> {
        self.find_minimum().ok()
    }

    /// Removes and returns the smallest key, or `None` when empty
    ///
    /// This is `BinaryHeap::pop`, but for a min-heap.
    fn pop(&mut self) -> Option<K> {
        self.delete_minimum().ok()
    }
}
