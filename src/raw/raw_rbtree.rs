use core::cmp::Ordering;
use core::mem;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node};
use crate::compare::Compare;

const MISSING_SIBLING: &str = "`RawRBTree::remove_fixup()` - black-height deficit without a sibling!";

/// The order-statistic red-black tree backing `OSRBTreeMap`.
pub(crate) struct RawRBTree<K, V, C> {
    /// Arena storing all tree nodes.
    pub(super) nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    pub(super) root: Option<Handle>,
    /// Total number of key-value pairs in the tree. Always `size(root)`.
    pub(super) len: usize,
    /// The key order, fixed at construction.
    pub(super) compare: C,
}

impl<K, V, C> RawRBTree<K, V, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(compare: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            compare,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(compare: C, capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            compare,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Drops every entry and resets the tree to empty.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Moves every entry out of the tree, in no particular order. The tree is
    /// empty as soon as this returns, even if the iterator is not consumed.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (K, V)> + '_ {
        self.root = None;
        self.len = 0;
        self.nodes.drain().map(Node::into_entry)
    }

    /// Returns the key and value stored at `handle`.
    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (&node.key, &node.value)
    }

    /// Returns the key and a mutable value stored at `handle`. The key stays
    /// shared because changing it could break the ordering.
    pub(crate) fn entry_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let node = self.nodes.get_mut(handle);
        (&node.key, &mut node.value)
    }

    /// Removes the node at `handle` and returns its entry, rebalancing as
    /// needed.
    pub(crate) fn remove_handle(&mut self, target: Handle) -> (K, V) {
        let node = self.nodes.get(target);
        // A node with two children trades entries with its in-order
        // successor, and the successor (which has no left child) is the one
        // unlinked.
        let spliced = match (node.left, node.right) {
            (Some(_), Some(right)) => self.leftmost(right),
            _ => target,
        };

        let spliced_node = self.nodes.get(spliced);
        let child = spliced_node.left.or(spliced_node.right);
        let parent = spliced_node.parent;
        if let Some(child) = child {
            self.nodes.get_mut(child).parent = parent;
        }
        self.replace_child(parent, spliced, child);

        let mut ancestor = parent;
        while let Some(handle) = ancestor {
            let node = self.nodes.get_mut(handle);
            node.size -= 1;
            ancestor = node.parent;
        }

        let mut removed = self.nodes.take(spliced);
        if spliced != target {
            let node = self.nodes.get_mut(target);
            mem::swap(&mut node.key, &mut removed.key);
            mem::swap(&mut node.value, &mut removed.value);
        }

        if removed.color == Color::Black {
            self.remove_fixup(child, parent);
        }

        self.len -= 1;
        removed.into_entry()
    }

    // ─── Link and color helpers ──────────────────────────────────────────────

    #[inline]
    pub(super) fn left(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).left
    }

    #[inline]
    pub(super) fn right(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).right
    }

    #[inline]
    pub(super) fn parent(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).parent
    }

    /// Absent children count as black.
    #[inline]
    fn is_red(&self, handle: Option<Handle>) -> bool {
        handle.is_some_and(|h| self.nodes.get(h).is_red())
    }

    #[inline]
    fn set_color(&mut self, handle: Handle, color: Color) {
        self.nodes.get_mut(handle).color = color;
    }

    /// Subtree size, with absent children contributing zero.
    #[inline]
    pub(super) fn size_of(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |h| self.nodes.get(h).size)
    }

    fn update_size(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let size = 1 + self.size_of(node.left) + self.size_of(node.right);
        self.nodes.get_mut(handle).size = size;
    }

    /// Points whichever link of `parent` referenced `old` at `new` instead.
    /// A `None` parent means `old` was the root.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = self.nodes.get_mut(parent);
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            }
        }
    }

    // ─── Rotations ───────────────────────────────────────────────────────────

    /// Lifts the right child of `pivot` into its place.
    ///
    /// Only `pivot` and its former right child change subtree contents, so
    /// their sizes are recomputed (lower node first) and every other size in
    /// the tree remains exact.
    pub(super) fn rotate_left(&mut self, pivot: Handle) {
        let child = self.right(pivot).expect("`RawRBTree::rotate_left()` - pivot has no right child!");
        let inner = self.left(child);

        self.nodes.get_mut(pivot).right = inner;
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).parent = Some(pivot);
        }

        let parent = self.parent(pivot);
        self.nodes.get_mut(child).parent = parent;
        self.replace_child(parent, pivot, Some(child));

        self.nodes.get_mut(child).left = Some(pivot);
        self.nodes.get_mut(pivot).parent = Some(child);

        self.update_size(pivot);
        self.update_size(child);
    }

    /// Lifts the left child of `pivot` into its place.
    pub(super) fn rotate_right(&mut self, pivot: Handle) {
        let child = self.left(pivot).expect("`RawRBTree::rotate_right()` - pivot has no left child!");
        let inner = self.right(child);

        self.nodes.get_mut(pivot).left = inner;
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).parent = Some(pivot);
        }

        let parent = self.parent(pivot);
        self.nodes.get_mut(child).parent = parent;
        self.replace_child(parent, pivot, Some(child));

        self.nodes.get_mut(child).right = Some(pivot);
        self.nodes.get_mut(pivot).parent = Some(child);

        self.update_size(pivot);
        self.update_size(child);
    }

    // ─── Fixups ──────────────────────────────────────────────────────────────

    /// Restores the red-black properties after `node` was attached as a red
    /// leaf.
    fn insert_fixup(&mut self, mut node: Handle) {
        while let Some(parent) = self.parent(node).filter(|&p| self.nodes.get(p).is_red()) {
            // The root is black, so a red parent always has a parent.
            let grandparent =
                self.parent(parent).expect("`RawRBTree::insert_fixup()` - red node is the root!");

            if self.left(grandparent) == Some(parent) {
                let uncle = self.right(grandparent);
                if let Some(uncle) = uncle.filter(|&u| self.nodes.get(u).is_red()) {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                } else {
                    let parent = if self.right(parent) == Some(node) {
                        self.rotate_left(parent);
                        node = parent;
                        self.parent(node).expect("`RawRBTree::insert_fixup()` - rotation lost the parent!")
                    } else {
                        parent
                    };
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left(grandparent);
                if let Some(uncle) = uncle.filter(|&u| self.nodes.get(u).is_red()) {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                } else {
                    let parent = if self.left(parent) == Some(node) {
                        self.rotate_right(parent);
                        node = parent;
                        self.parent(node).expect("`RawRBTree::insert_fixup()` - rotation lost the parent!")
                    } else {
                        parent
                    };
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Restores the red-black properties after a black node was unlinked.
    ///
    /// `node` took the unlinked node's place (possibly absent) under
    /// `parent`, and every path through it is one black node short.
    fn remove_fixup(&mut self, mut node: Option<Handle>, mut parent: Option<Handle>) {
        while node != self.root && !self.is_red(node) {
            let Some(p) = parent else { break };

            if self.left(p) == node {
                let mut sibling = self.right(p).expect(MISSING_SIBLING);
                if self.nodes.get(sibling).is_red() {
                    self.set_color(sibling, Color::Black);
                    self.set_color(p, Color::Red);
                    self.rotate_left(p);
                    sibling = self.right(p).expect(MISSING_SIBLING);
                }

                if !self.is_red(self.left(sibling)) && !self.is_red(self.right(sibling)) {
                    self.set_color(sibling, Color::Red);
                    node = Some(p);
                    parent = self.parent(p);
                } else {
                    if !self.is_red(self.right(sibling)) {
                        let inner = self.left(sibling).expect(MISSING_SIBLING);
                        self.set_color(inner, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = self.right(p).expect(MISSING_SIBLING);
                    }

                    let color = self.nodes.get(p).color;
                    self.set_color(sibling, color);
                    self.set_color(p, Color::Black);
                    if let Some(outer) = self.right(sibling) {
                        self.set_color(outer, Color::Black);
                    }
                    self.rotate_left(p);
                    node = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = self.left(p).expect(MISSING_SIBLING);
                if self.nodes.get(sibling).is_red() {
                    self.set_color(sibling, Color::Black);
                    self.set_color(p, Color::Red);
                    self.rotate_right(p);
                    sibling = self.left(p).expect(MISSING_SIBLING);
                }

                if !self.is_red(self.left(sibling)) && !self.is_red(self.right(sibling)) {
                    self.set_color(sibling, Color::Red);
                    node = Some(p);
                    parent = self.parent(p);
                } else {
                    if !self.is_red(self.left(sibling)) {
                        let inner = self.right(sibling).expect(MISSING_SIBLING);
                        self.set_color(inner, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = self.left(p).expect(MISSING_SIBLING);
                    }

                    let color = self.nodes.get(p).color;
                    self.set_color(sibling, color);
                    self.set_color(p, Color::Black);
                    if let Some(outer) = self.left(sibling) {
                        self.set_color(outer, Color::Black);
                    }
                    self.rotate_right(p);
                    node = self.root;
                    parent = None;
                }
            }
        }

        if let Some(node) = node {
            self.set_color(node, Color::Black);
        }
    }
}

impl<K, V, C: Compare<K>> RawRBTree<K, V, C> {
    /// Inserts a key-value pair into the tree.
    ///
    /// If the key is already present the stored key is kept, the value is
    /// replaced and the old value is returned.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = None;
        let mut attach_left = false;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            parent = current;
            match self.compare.compare(&key, &node.key) {
                Ordering::Less => {
                    attach_left = true;
                    current = node.left;
                }
                Ordering::Greater => {
                    attach_left = false;
                    current = node.right;
                }
                Ordering::Equal => {
                    return Some(mem::replace(&mut self.nodes.get_mut(handle).value, value));
                }
            }
        }

        // Allocation happens before any link changes, so a full arena leaves
        // the tree untouched.
        let handle = self.nodes.alloc(Node::new(key, value));
        self.nodes.get_mut(handle).parent = parent;
        match parent {
            None => self.root = Some(handle),
            Some(p) if attach_left => self.nodes.get_mut(p).left = Some(handle),
            Some(p) => self.nodes.get_mut(p).right = Some(handle),
        }

        let mut ancestor = parent;
        while let Some(h) = ancestor {
            let node = self.nodes.get_mut(h);
            node.size += 1;
            ancestor = node.parent;
        }

        self.len += 1;
        self.insert_fixup(handle);
        None
    }

    /// Removes a key from the tree, returning the stored entry if present.
    pub(crate) fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let handle = self.search(key)?;
        Some(self.remove_handle(handle))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::uninlined_format_args
)]
mod tests {
    use super::*;
    use crate::compare::Natural;
    use alloc::collections::BTreeMap;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    impl<K, V, C: Compare<K>> RawRBTree<K, V, C> {
        /// Checks every structural invariant and panics with a description of
        /// the first violation found.
        pub(crate) fn validate_invariants(&self) {
            let Some(root) = self.root else {
                assert_eq!(self.len, 0, "empty tree should have len 0");
                assert!(self.nodes.is_empty(), "empty tree should have no live nodes");
                return;
            };

            assert!(self.parent(root).is_none(), "root has a parent");
            assert!(!self.nodes.get(root).is_red(), "root is red");

            let (size, _) = self.validate_subtree(root);
            assert_eq!(size, self.len, "len does not match size(root)");
            assert_eq!(self.nodes.len(), self.len, "arena holds unreachable nodes");

            // In-order walk over parent links must be strictly increasing and
            // visit every node.
            let mut visited = 1;
            let mut previous = self.first().expect("non-empty tree has a first node");
            while let Some(next) = self.successor(previous) {
                let ordering = self.compare.compare(&self.nodes.get(previous).key, &self.nodes.get(next).key);
                assert_eq!(ordering, Ordering::Less, "in-order walk is not strictly increasing");
                assert_eq!(self.predecessor(next), Some(previous), "predecessor does not mirror successor");
                previous = next;
                visited += 1;
            }
            assert_eq!(visited, self.len, "in-order walk length does not match len");
        }

        /// Returns `(size, black_height)` of the subtree at `handle`.
        fn validate_subtree(&self, handle: Handle) -> (usize, usize) {
            let node = self.nodes.get(handle);
            let measure = |child: Option<Handle>| match child {
                None => (0, 1),
                Some(child) => {
                    assert_eq!(self.parent(child), Some(handle), "child does not point back at its parent");
                    assert!(!(node.is_red() && self.nodes.get(child).is_red()), "red node has a red child");
                    self.validate_subtree(child)
                }
            };

            let (left_size, left_black) = measure(node.left);
            let (right_size, right_black) = measure(node.right);
            assert_eq!(left_black, right_black, "black-height differs between subtrees");
            assert_eq!(node.size, 1 + left_size + right_size, "size augmentation is stale");

            (node.size, left_black + usize::from(!node.is_red()))
        }

        fn height(&self) -> usize {
            fn walk<K, V, C>(tree: &RawRBTree<K, V, C>, handle: Option<Handle>) -> usize {
                handle.map_or(0, |h| 1 + walk(tree, tree.left(h)).max(walk(tree, tree.right(h))))
            }
            walk(self, self.root)
        }

        fn keys(&self) -> Vec<&K> {
            let mut keys = Vec::with_capacity(self.len);
            let mut current = self.first();
            while let Some(handle) = current {
                keys.push(self.entry(handle).0);
                current = self.successor(handle);
            }
            keys
        }
    }

    fn tree_of(keys: &[i32]) -> RawRBTree<i32, i32, Natural> {
        let mut tree = RawRBTree::new(Natural);
        for &key in keys {
            tree.insert(key, key * 10);
            tree.validate_invariants();
        }
        tree
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0i32..1000).prop_map(Op::Insert),
            2 => (0i32..1000).prop_map(Op::Remove),
        ]
    }

    #[test]
    fn empty_tree() {
        let mut tree: RawRBTree<i32, i32, Natural> = RawRBTree::new(Natural);
        tree.validate_invariants();
        assert!(tree.is_empty());
        assert_eq!(tree.search(&1), None);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.select(0), None);
        assert_eq!(tree.order_of_key(&5), 0);
        assert_eq!(tree.remove_entry(&1), None);
        tree.validate_invariants();
    }

    #[test]
    fn small_tree_ranks_and_selects() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);

        assert_eq!(tree.order_of_key(&7), 4);
        let first = tree.select(0).expect("rank 0 exists");
        let last = tree.select(6).expect("rank 6 exists");
        assert_eq!(tree.entry(first), (&1, &10));
        assert_eq!(tree.entry(last), (&9, &90));
        assert_eq!(tree.select(7), None);
    }

    #[test]
    fn sequential_inserts_stay_balanced() {
        let mut tree = RawRBTree::new(Natural);
        for key in 1..=1000 {
            tree.insert(key, ());
        }
        tree.validate_invariants();

        let bound = 2 * (1001usize.ilog2() as usize + 1);
        assert!(tree.height() <= bound, "height {} exceeds {}", tree.height(), bound);
        assert_eq!(tree.len(), 1000);
    }

    #[test]
    fn reverse_inserts_stay_balanced() {
        let mut tree = RawRBTree::new(Natural);
        for key in (1..=1000).rev() {
            tree.insert(key, ());
        }
        tree.validate_invariants();
        assert!(tree.height() <= 20);
    }

    #[test]
    fn removing_node_with_two_children_keeps_order() {
        let mut tree = tree_of(&[50, 30, 70, 20, 40, 60, 80, 35, 45, 65]);
        let root = tree.root.expect("tree is non-empty");
        assert!(tree.left(root).is_some() && tree.right(root).is_some());
        let root_key = *tree.entry(root).0;

        assert_eq!(tree.remove_entry(&root_key), Some((root_key, root_key * 10)));
        tree.validate_invariants();

        let mut expected = alloc::vec![20, 30, 35, 40, 45, 50, 60, 65, 70, 80];
        expected.retain(|&k| k != root_key);
        assert_eq!(tree.keys().into_iter().copied().collect::<Vec<_>>(), expected);

        // Every remaining key still maps to its own value after the swap.
        for key in expected {
            let handle = tree.search(&key).expect("key survives");
            assert_eq!(tree.entry(handle), (&key, &(key * 10)));
        }
    }

    #[test]
    fn removing_inner_node_returns_its_own_entry() {
        let mut tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(tree.remove_entry(&3), Some((3, 30)));
        assert_eq!(tree.remove_entry(&3), None);
        tree.validate_invariants();
        assert_eq!(tree.search(&4).map(|h| tree.entry(h)), Some((&4, &40)));
    }

    #[test]
    fn duplicate_insert_replaces_value_only() {
        let mut tree = tree_of(&[2, 1, 3]);
        assert_eq!(tree.insert(2, 99), Some(20));
        assert_eq!(tree.len(), 3);
        tree.validate_invariants();
        let handle = tree.search(&2).expect("key present");
        assert_eq!(tree.entry(handle), (&2, &99));
    }

    #[test]
    fn custom_comparator_reverses_order() {
        let mut tree = RawRBTree::new(|a: &i32, b: &i32| b.cmp(a));
        for key in 0..50 {
            tree.insert(key, ());
        }
        tree.validate_invariants();
        assert_eq!(*tree.entry(tree.select(0).expect("rank 0")).0, 49);
        assert_eq!(tree.order_of_key(&10), 39);
        assert_eq!(tree.lower_bound(&60).map(|h| *tree.entry(h).0), Some(49));
    }

    #[test]
    fn rotations_keep_sizes_exact() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let root = tree.root.expect("tree is non-empty");

        tree.rotate_left(root);
        let new_root = tree.root.expect("tree is non-empty");
        assert_eq!(*tree.entry(new_root).0, 6);
        assert_eq!(tree.size_of(Some(new_root)), 7);
        assert_eq!(tree.size_of(tree.left(new_root)), 5);
        assert_eq!(tree.parent(root), Some(new_root));

        tree.rotate_right(new_root);
        assert_eq!(tree.root, Some(root));
        assert_eq!(tree.size_of(tree.left(root)), 3);
        assert_eq!(tree.size_of(tree.right(root)), 3);
        tree.validate_invariants();
    }

    #[test]
    fn clear_and_drain_reset_the_tree() {
        let mut tree = tree_of(&[1, 2, 3, 4]);
        let mut drained: Vec<(i32, i32)> = tree.drain().collect();
        drained.sort_unstable();
        assert_eq!(drained, [(1, 10), (2, 20), (3, 30), (4, 40)]);
        tree.validate_invariants();

        tree.insert(9, 90);
        tree.clear();
        tree.validate_invariants();
        assert!(tree.is_empty());
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc()` - arena is at maximum capacity")]
    fn insert_past_handle_space_panics() {
        let mut tree = RawRBTree::new(Natural);
        for key in 0..=Handle::MAX + 1 {
            tree.insert(key, ());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn tree_invariants_maintained_after_operations(ops in prop::collection::vec(op_strategy(), 0..500)) {
            let mut tree = RawRBTree::new(Natural);
            let mut model = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        prop_assert_eq!(tree.insert(key, key * 2), model.insert(key, key * 2));
                    }
                    Op::Remove(key) => {
                        prop_assert_eq!(tree.remove_entry(&key), model.remove_entry(&key));
                    }
                }
                tree.validate_invariants();
                prop_assert_eq!(tree.len(), model.len());
            }
        }

        #[test]
        fn insert_then_erase_permutations_empty_the_tree(
            inserts in Just((1..=200).collect::<Vec<i32>>()).prop_shuffle(),
            removals in Just((1..=200).collect::<Vec<i32>>()).prop_shuffle(),
        ) {
            let mut tree = RawRBTree::new(Natural);
            for &key in &inserts {
                prop_assert!(tree.insert(key, key).is_none());
                tree.validate_invariants();
            }
            for &key in &removals {
                prop_assert_eq!(tree.remove_entry(&key), Some((key, key)));
                tree.validate_invariants();
            }
            prop_assert!(tree.is_empty());
            prop_assert_eq!(tree.len(), 0);
            prop_assert!(tree.root.is_none());
        }

        #[test]
        fn rank_and_select_are_inverse(keys in prop::collection::btree_set(-500i32..500, 1..300)) {
            let mut tree = RawRBTree::new(Natural);
            for &key in &keys {
                tree.insert(key, ());
            }

            for (rank, key) in keys.iter().enumerate() {
                let handle = tree.select(rank).expect("rank in range");
                prop_assert_eq!(tree.entry(handle).0, key);
                prop_assert_eq!(tree.order_of_key(key), rank);
                prop_assert_eq!(tree.rank_of(key), Some(rank));
                prop_assert_eq!(tree.rank_of_handle(handle), rank);
            }
            prop_assert!(tree.select(keys.len()).is_none());
        }

        #[test]
        fn order_of_key_counts_smaller_keys(
            keys in prop::collection::btree_set(-500i32..500, 0..300),
            probes in prop::collection::vec(-600i32..600, 50),
        ) {
            let mut tree = RawRBTree::new(Natural);
            for &key in &keys {
                tree.insert(key, ());
            }

            for probe in probes {
                let expected = keys.range(..probe).count();
                prop_assert_eq!(tree.order_of_key(&probe), expected, "order_of_key({})", probe);
                prop_assert_eq!(tree.rank_of(&probe), keys.contains(&probe).then_some(expected));
            }
        }

        #[test]
        fn bounds_match_btreeset(
            keys in prop::collection::btree_set(-500i32..500, 0..300),
            probes in prop::collection::vec(-600i32..600, 50),
        ) {
            let mut tree = RawRBTree::new(Natural);
            for &key in &keys {
                tree.insert(key, ());
            }

            for probe in probes {
                let lower = tree.lower_bound(&probe).map(|h| *tree.entry(h).0);
                let upper = tree.upper_bound(&probe).map(|h| *tree.entry(h).0);
                prop_assert_eq!(lower, keys.range(probe..).next().copied(), "lower_bound({})", probe);
                prop_assert_eq!(upper, keys.range(..=probe).next_back().copied(), "upper_bound({})", probe);
            }
        }
    }
}
