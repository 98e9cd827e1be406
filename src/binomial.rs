//! Binomial Heap implementation
//!
//! A binomial heap keeps its keys in a forest of heap-ordered trees whose
//! roots form a singly linked *root list*. Every tree is grown by one
//! primitive, `link`: two roots are compared and the one
//! with the larger key becomes the first child of the other.
//!
//! # Forest Shape
//!
//! This heap does **not** carry-merge trees of equal degree on insert. A new
//! key is linked directly against the head of the root list, so the forest is
//! whatever chain of pairwise links the operation history produced:
//!
//! - **Insert**: O(1) - one link against the head root
//! - **Find-min**: O(r) - scan of the r roots
//! - **Delete-min**: O(r + d) - scan, splice out, reverse the d children, one link
//!
//! The heap order (every key ≤ all keys below it) and the degree counts are
//! always exact; the `2ᵏ` node count of a textbook binomial tree is not.
//!
//! # Storage
//!
//! Nodes live in a `NodeArena` and point at each other with
//! `NodeKey` handles, so detaching and relinking never juggles
//! references or reference counts.

use crate::node::HeapNode;
use crate::storage::{NodeArena, NodeKey};
use crate::traits::{HeapError, MinHeap};
use std::collections::HashSet;
use std::fmt;

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use binomial_heap::{BinomialHeap, MinHeap};
///
/// let mut heap: BinomialHeap<i32> = [5, 3, 8, 1, 9].into_iter().collect();
/// assert_eq!(heap.find_minimum(), Ok(&1));
///
/// heap.delete_minimum().unwrap();
/// assert_eq!(heap.find_minimum(), Ok(&3));
///
/// assert!(heap.remove(&8));
/// assert_eq!(heap.into_sorted_vec(), vec![3, 5, 9]);
/// ```
#[derive(Clone)]
pub struct BinomialHeap<K> {
    nodes: NodeArena<K>,
    /// Head of the root list
    root: Option<NodeKey>,
    len: usize,
}

impl<K: Ord> MinHeap<K> for BinomialHeap<K> {
    fn new() -> Self {
        Self {
            nodes: NodeArena::default(),
            root: None,
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Inserts a new key into the heap
    ///
    /// **Time Complexity**: O(1)
    ///
    /// **Algorithm**:
    /// 1. Allocate a singleton node (degree 0)
    /// 2. If the heap is empty, it becomes the root list
    /// 3. Otherwise link it with the head root; the survivor becomes the new
    ///    head and the rest of the root list follows it unchanged
    fn insert(&mut self, key: K) {
        let node = self.nodes.alloc(key);
        self.len += 1;

        match self.root {
            None => self.root = Some(node),
            Some(head) => {
                let rest = self.take_sibling(head);
                let merged = self.link(head, node);
                self.nodes.set_sibling(merged, rest);
                self.root = Some(merged);
            }
        }
    }

    /// Returns the smallest key
    ///
    /// **Time Complexity**: O(r) where r is the length of the root list
    ///
    /// Heap order makes every tree minimum sit at its root, so scanning the
    /// root list is enough.
    fn find_minimum(&self) -> Result<&K, HeapError> {
        let head = self.root.ok_or(HeapError::EmptyHeap)?;
        let min = self.find_min_node(head);
        self.nodes.key(min).ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the smallest key
    ///
    /// **Time Complexity**: O(r + d) where d is the degree of the removed root
    ///
    /// **Algorithm**:
    /// 1. Scan the root list for the minimum root
    /// 2. Splice it out of the root list
    /// 3. Reverse its child list
    /// 4. Fold the reversed children back into the root list (see
    ///    `absorb_roots`)
    fn delete_minimum(&mut self) -> Result<K, HeapError> {
        let head = self.root.ok_or(HeapError::EmptyHeap)?;
        let min = self.find_min_node(head);
        self.remove_root(min)
    }
}

impl<K: Ord> BinomialHeap<K> {
    /// Removes one occurrence of `key` from the heap
    ///
    /// Returns `false`, leaving the heap untouched, if no element compares
    /// equal to `key`.
    ///
    /// **Time Complexity**: O(n) search, then O(h + r + d) for the removal
    pub fn remove(&mut self, key: &K) -> bool {
        match self.find_node(key) {
            Some(node) => self.remove_node(node).is_ok(),
            None => false,
        }
    }

    /// Consumes the heap and returns its keys in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Ok(key) = self.delete_minimum() {
            sorted.push(key);
        }
        sorted
    }

    /// Checks every structural invariant of the forest
    ///
    /// - heap order: no child key is smaller than its parent's
    /// - `degree` equals the length of the child list
    /// - roots have no parent; children point at the node owning their list
    /// - every stored node is reachable from the root list exactly once
    pub fn verify_structure(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.len);
        let mut stack = Vec::new();

        let mut current = self.root;
        while let Some(id) = current {
            if !self.nodes.get(id).is_some_and(HeapNode::is_root) {
                return false;
            }
            stack.push(id);
            current = self.nodes.sibling(id);
        }

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                return false;
            }
            let Some(node) = self.nodes.get(id) else {
                return false;
            };

            let mut children = 0;
            let mut child = node.child;
            while let Some(c) = child {
                let Some(child_node) = self.nodes.get(c) else {
                    return false;
                };
                if child_node.parent != Some(id) || child_node.key < node.key {
                    return false;
                }
                children += 1;
                stack.push(c);
                child = child_node.sibling;
            }
            if children != node.degree {
                return false;
            }
        }

        seen.len() == self.len && self.nodes.len() == self.len
    }

    /// Makes the root with the larger key the first child of the other
    ///
    /// Both arguments must be roots of their own trees. Ties keep `a` as the
    /// parent. Only the new child's `parent`/`sibling` and the parent's
    /// `child`/`degree` are written; the survivor's own `sibling` is left
    /// as it was.
    fn link(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        let b_wins = match (self.nodes.key(a), self.nodes.key(b)) {
            (Some(ka), Some(kb)) => ka > kb,
            _ => false,
        };
        let (parent, child) = if b_wins { (b, a) } else { (a, b) };

        let first_child = self.nodes.child(parent);
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
            node.sibling = first_child;
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.child = Some(child);
            node.degree += 1;
        }
        parent
    }

    /// Returns the node with the smallest key in the sibling list starting at
    /// `start`; the first of several equal minima wins
    fn find_min_node(&self, start: NodeKey) -> NodeKey {
        let mut min = start;
        let mut current = self.nodes.sibling(start);
        while let Some(id) = current {
            if self.nodes.key(id) < self.nodes.key(min) {
                min = id;
            }
            current = self.nodes.sibling(id);
        }
        min
    }

    /// Unlinks a root from the root list and frees it, returning its key
    ///
    /// Its children become roots. Shared by `delete_minimum` and
    /// `remove_node`.
    fn remove_root(&mut self, id: NodeKey) -> Result<K, HeapError> {
        let removed: HeapNode<K> = self.nodes.release(id).ok_or(HeapError::EmptyHeap)?;
        self.unlink(id, removed.sibling, removed.parent);
        self.len -= 1;

        let children = self.reverse_sibling_order(removed.child);
        self.absorb_roots(children);
        Ok(removed.key)
    }

    /// Splices `id` out of the list that holds it
    ///
    /// `next` and `parent` are the links `id` had, so this works whether or not
    /// `id` is still in the arena. Handles the root list as well as a parent's
    /// child list; in the latter case the parent's degree drops by one.
    fn unlink(&mut self, id: NodeKey, next: Option<NodeKey>, parent: Option<NodeKey>) {
        if self.root == Some(id) {
            self.root = next;
        } else if let Some(parent) = parent {
            if self.nodes.child(parent) == Some(id) {
                if let Some(node) = self.nodes.get_mut(parent) {
                    node.child = next;
                }
            } else if let Some(first) = self.nodes.child(parent) {
                self.bypass(first, id, next);
            }
            if let Some(node) = self.nodes.get_mut(parent) {
                node.degree -= 1;
            }
        } else if let Some(first) = self.root {
            self.bypass(first, id, next);
        }
    }

    /// Walks the sibling list from `first` and points the predecessor of
    /// `target` at `after`
    fn bypass(&mut self, first: NodeKey, target: NodeKey, after: Option<NodeKey>) {
        let mut prev = first;
        while let Some(next) = self.nodes.sibling(prev) {
            if next == target {
                self.nodes.set_sibling(prev, after);
                return;
            }
            prev = next;
        }
    }

    /// Reverses a sibling list in place and returns its new head
    fn reverse_sibling_order(&mut self, head: Option<NodeKey>) -> Option<NodeKey> {
        let mut reversed = None;
        let mut current = head;
        while let Some(id) = current {
            current = self.nodes.sibling(id);
            self.nodes.set_sibling(id, reversed);
            reversed = Some(id);
        }
        reversed
    }

    /// Folds a detached list of trees into the root list
    ///
    /// The trees are made roots (parent cleared). If the root list is empty the
    /// list replaces it; otherwise the two heads are linked and the survivor
    /// leads, followed by the remaining old roots and then the remaining new
    /// ones.
    fn absorb_roots(&mut self, list: Option<NodeKey>) {
        let Some(list_head) = list else {
            return;
        };

        let mut current = list;
        while let Some(id) = current {
            self.nodes.set_parent(id, None);
            current = self.nodes.sibling(id);
        }

        match self.root {
            None => self.root = Some(list_head),
            Some(root_head) => {
                let root_rest = self.take_sibling(root_head);
                let list_rest = self.take_sibling(list_head);
                let merged = self.link(root_head, list_head);
                let rest = self.concat(root_rest, list_rest);
                self.nodes.set_sibling(merged, rest);
                self.root = Some(merged);
            }
        }
    }

    /// Lowers the key of a node and bubbles it up by swapping keys with its
    /// ancestors while the parent's key is larger
    ///
    /// `Some(key)` stores `key`, which is expected to be no larger than the
    /// old one. `None` stands for a key below every other: the payload is kept
    /// and swapped all the way to the root of the tree.
    ///
    /// Only key payloads move; the node links stay where they are. Returns the
    /// node holding the lowered key afterwards.
    fn decrease_key(&mut self, id: NodeKey, key: Option<K>) -> NodeKey {
        let to_root = match key {
            Some(key) => {
                if let Some(node) = self.nodes.get_mut(id) {
                    node.key = key;
                }
                false
            }
            None => true,
        };

        let mut current = id;
        while let Some(parent) = self.nodes.parent(current) {
            if !to_root && self.nodes.key(parent) <= self.nodes.key(current) {
                break;
            }
            if !self.nodes.swap_keys(current, parent) {
                break;
            }
            current = parent;
        }
        current
    }

    /// Removes the node `id` wherever it sits in the forest
    ///
    /// Its key is decreased below every other key, which brings it to the
    /// root of its tree, and that root is then removed like a minimum.
    fn remove_node(&mut self, id: NodeKey) -> Result<K, HeapError> {
        let top = self.decrease_key(id, None);
        self.remove_root(top)
    }

    /// Finds a node holding `key`, skipping subtrees whose root is already larger
    fn find_node(&self, key: &K) -> Option<NodeKey> {
        let mut stack: Vec<NodeKey> = Vec::new();
        stack.extend(self.root);

        while let Some(id) = stack.pop() {
            let node = self.nodes.get(id)?;
            stack.extend(node.sibling);
            match node.key.cmp(key) {
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Less => stack.extend(node.child),
                std::cmp::Ordering::Greater => {}
            }
        }
        None
    }
}

impl<K> BinomialHeap<K> {
    /// Removes every key
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the number of trees in the root list
    pub fn roots(&self) -> usize {
        let mut count = 0;
        let mut current = self.root;
        while let Some(id) = current {
            count += 1;
            current = self.nodes.sibling(id);
        }
        count
    }

    /// Iterates over the keys in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.nodes.values().map(|node| &node.key)
    }

    fn take_sibling(&mut self, id: NodeKey) -> Option<NodeKey> {
        let next = self.nodes.sibling(id);
        self.nodes.set_sibling(id, None);
        next
    }

    /// Appends list `b` after the last node of list `a`
    fn concat(&mut self, a: Option<NodeKey>, b: Option<NodeKey>) -> Option<NodeKey> {
        let Some(head) = a else {
            return b;
        };
        let mut tail = head;
        while let Some(next) = self.nodes.sibling(tail) {
            tail = next;
        }
        self.nodes.set_sibling(tail, b);
        Some(head)
    }
}

impl<K: Ord> Default for BinomialHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for BinomialHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHeap")
            .field("len", &self.len)
            .field("roots", &self.roots())
            .finish()
    }
}

impl<K: Ord> Extend<K> for BinomialHeap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for BinomialHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
