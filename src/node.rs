//! Forest node record
//!
//! A [`HeapNode`] stores one key plus the three relations that tie it into the
//! forest. Relations are arena handles ([`NodeKey`]), never references:
//!
//! - `parent`: upward link, `None` for a root. Not an ownership edge.
//! - `child`: head of this node's child list. The node owns the whole list.
//! - `sibling`: next node in whichever list this node belongs to (the root
//!   list, or its parent's child list).

use crate::storage::NodeKey;

/// A single node of a binomial tree
#[derive(Debug, Clone)]
pub(crate) struct HeapNode<K> {
    pub(crate) key: K,
    /// Number of direct children
    pub(crate) degree: usize,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) child: Option<NodeKey>,
    pub(crate) sibling: Option<NodeKey>,
}

impl<K> HeapNode<K> {
    /// Creates a detached node of degree 0
    pub(crate) fn new(key: K) -> Self {
        HeapNode {
            key,
            degree: 0,
            parent: None,
            child: None,
            sibling: None,
        }
    }

    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
