//! Arena storage for heap nodes
//!
//! Nodes live in a [`SlotMap`] and refer to each other through [`NodeKey`]
//! handles instead of pointers. This keeps the parent/child/sibling graph free
//! of reference cycles and makes detaching and relinking nodes a matter of
//! rewriting `Option<NodeKey>` fields.
//!
//! A handle whose node has been released is detected by the slot version, so a
//! stale lookup yields `None` rather than aliasing a recycled slot.

use crate::node::HeapNode;
use slotmap::{new_key_type, SlotMap};
use std::mem;

new_key_type! {
    /// Handle to a node stored in a [`NodeArena`]
    pub struct NodeKey;
}

/// Owning store for every node of one heap
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K> {
    nodes: SlotMap<NodeKey, HeapNode<K>>,
}

impl<K> Default for NodeArena<K> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl<K> NodeArena<K> {
    /// Allocates a fresh singleton node holding `key`
    pub(crate) fn alloc(&mut self, key: K) -> NodeKey {
        self.nodes.insert(HeapNode::new(key))
    }

    /// Releases a node, returning its record
    ///
    /// The caller is responsible for having unlinked it from the forest first.
    pub(crate) fn release(&mut self, id: NodeKey) -> Option<HeapNode<K>> {
        self.nodes.remove(id)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeKey) -> Option<&HeapNode<K>> {
        self.nodes.get(id)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeKey) -> Option<&mut HeapNode<K>> {
        self.nodes.get_mut(id)
    }

    #[inline]
    pub(crate) fn key(&self, id: NodeKey) -> Option<&K> {
        self.nodes.get(id).map(|node| &node.key)
    }

    #[inline]
    pub(crate) fn sibling(&self, id: NodeKey) -> Option<NodeKey> {
        self.nodes.get(id).and_then(|node| node.sibling)
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeKey) -> Option<NodeKey> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeKey) -> Option<NodeKey> {
        self.nodes.get(id).and_then(|node| node.child)
    }

    #[inline]
    pub(crate) fn set_sibling(&mut self, id: NodeKey, sibling: Option<NodeKey>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.sibling = sibling;
        }
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeKey, parent: Option<NodeKey>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = parent;
        }
    }

    /// Exchanges the key payloads of two distinct nodes, leaving their links in place
    ///
    /// Returns `false` if either handle is stale or both name the same node.
    pub(crate) fn swap_keys(&mut self, a: NodeKey, b: NodeKey) -> bool {
        match self.nodes.get_disjoint_mut([a, b]) {
            Some([first, second]) => {
                mem::swap(&mut first.key, &mut second.key);
                true
            }
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterates over every stored node in slot order
    pub(crate) fn values(&self) -> impl Iterator<Item = &HeapNode<K>> {
        self.nodes.values()
    }
}
