//! Binomial Heap for Rust
//!
//! This crate provides a mergeable min-priority queue built from a forest of
//! heap-ordered trees, with the forest stored in an index-addressed arena.
//!
//! # Operations
//!
//! - **insert**: O(1) - link the new key against the head of the root list
//! - **find_minimum**: O(r) - scan the r roots
//! - **delete_minimum**: O(r + d) - splice out the minimum root, reverse its
//!   d children and fold them back into the root list
//! - **remove**: removal of an arbitrary key by bubbling it to the top of its tree
//!
//! Operations that need an element report [`HeapError::EmptyHeap`] on an
//! empty heap and leave it unchanged.
//!
//! # Example
//!
//! ```rust
//! use binomial_heap::{BinomialHeap, MinHeap};
//!
//! let mut heap = BinomialHeap::new();
//! for key in [5, 3, 8, 1, 9] {
//!     heap.insert(key);
//! }
//!
//! let mut order = Vec::new();
//! while let Ok(min) = heap.delete_minimum() {
//!     order.push(min);
//! }
//! assert_eq!(order, vec![1, 3, 5, 8, 9]);
//! ```

pub mod binomial;
mod node;
mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use binomial::BinomialHeap;
pub use traits::{HeapError, MinHeap};
