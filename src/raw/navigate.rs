use core::cmp::Ordering;

use super::handle::Handle;
use super::raw_rbtree::RawRBTree;
use crate::compare::Compare;

impl<K, V, C> RawRBTree<K, V, C> {
    /// Returns the node holding the smallest key.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.leftmost(root))
    }

    /// Returns the node holding the largest key.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.rightmost(root))
    }

    pub(crate) fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.left(handle) {
            handle = left;
        }
        handle
    }

    pub(crate) fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.right(handle) {
            handle = right;
        }
        handle
    }

    /// Returns the in-order successor of `handle`, walking parent links when
    /// there is no right subtree.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.right(handle) {
            return Some(self.leftmost(right));
        }

        let mut child = handle;
        while let Some(parent) = self.parent(child) {
            if self.left(parent) == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }

    /// Returns the in-order predecessor of `handle`.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        if let Some(left) = self.left(handle) {
            return Some(self.rightmost(left));
        }

        let mut child = handle;
        while let Some(parent) = self.parent(child) {
            if self.right(parent) == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }

    /// Returns the node with zero-based rank `order`, or `None` if
    /// `order >= len`.
    pub(crate) fn select(&self, mut order: usize) -> Option<Handle> {
        if order >= self.len {
            return None;
        }

        let mut current = self.root;
        while let Some(handle) = current {
            let left = self.left(handle);
            let left_size = self.size_of(left);
            match order.cmp(&left_size) {
                Ordering::Less => current = left,
                Ordering::Equal => return Some(handle),
                Ordering::Greater => {
                    order -= left_size + 1;
                    current = self.right(handle);
                }
            }
        }

        // Only reachable if the size augmentation is corrupt.
        None
    }

    /// Returns the zero-based rank of the node at `handle` by climbing to the
    /// root.
    pub(crate) fn rank_of_handle(&self, handle: Handle) -> usize {
        let mut rank = self.size_of(self.left(handle));
        let mut child = handle;
        while let Some(parent) = self.parent(child) {
            if self.right(parent) == Some(child) {
                rank += 1 + self.size_of(self.left(parent));
            }
            child = parent;
        }
        rank
    }
}

impl<K, V, C: Compare<K>> RawRBTree<K, V, C> {
    /// Returns the node holding `key`, if any.
    pub(crate) fn search(&self, key: &K) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match self.compare.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns the node holding the smallest key `>= key`.
    pub(crate) fn lower_bound(&self, key: &K) -> Option<Handle> {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if self.compare.compare(&node.key, key) == Ordering::Less {
                current = node.right;
            } else {
                candidate = current;
                current = node.left;
            }
        }
        candidate
    }

    /// Returns the node holding the largest key `<= key`.
    pub(crate) fn upper_bound(&self, key: &K) -> Option<Handle> {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if self.compare.compare(&node.key, key) == Ordering::Greater {
                current = node.left;
            } else {
                candidate = current;
                current = node.right;
            }
        }
        candidate
    }

    /// Counts the stored keys strictly less than `key`, whether or not `key`
    /// itself is stored.
    pub(crate) fn order_of_key(&self, key: &K) -> usize {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if self.compare.compare(key, &node.key) == Ordering::Greater {
                rank += 1 + self.size_of(node.left);
                current = node.right;
            } else {
                current = node.left;
            }
        }
        rank
    }

    /// Returns the rank of `key` if it is stored.
    pub(crate) fn rank_of(&self, key: &K) -> Option<usize> {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match self.compare.compare(key, &node.key) {
                Ordering::Less => current = node.left,
                Ordering::Equal => return Some(rank + self.size_of(node.left)),
                Ordering::Greater => {
                    rank += 1 + self.size_of(node.left);
                    current = node.right;
                }
            }
        }
        None
    }
}
