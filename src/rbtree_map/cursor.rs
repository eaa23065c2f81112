use core::fmt;

use crate::compare::Natural;
use crate::raw::{Handle, RawRBTree};

/// A read-only position on one entry of an [`OSRBTreeMap`].
///
/// Cursors are returned by lookups such as [`find`], [`lower_bound`] and
/// [`begin`], and always sit on a stored entry. [`move_next`] and
/// [`move_prev`] step through the map in key order; when there is no entry
/// in that direction they return `false` and the cursor stays where it was.
///
/// A cursor borrows the map, so the map cannot be modified while any cursor
/// on it is alive.
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeMap;
///
/// let map = OSRBTreeMap::from([(1, "a"), (2, "b"), (3, "c")]);
///
/// let mut cursor = map.end().unwrap();
/// let mut keys = vec![*cursor.key()];
/// while cursor.move_prev() {
///     keys.push(*cursor.key());
/// }
/// assert_eq!(keys, [3, 2, 1]);
/// ```
///
/// [`OSRBTreeMap`]: super::OSRBTreeMap
/// [`find`]: super::OSRBTreeMap::find
/// [`lower_bound`]: super::OSRBTreeMap::lower_bound
/// [`begin`]: super::OSRBTreeMap::begin
/// [`move_next`]: Cursor::move_next
/// [`move_prev`]: Cursor::move_prev
pub struct Cursor<'a, K, V, C = Natural> {
    tree: &'a RawRBTree<K, V, C>,
    node: Handle,
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    pub(super) const fn new(tree: &'a RawRBTree<K, V, C>, node: Handle) -> Self {
        Cursor { tree, node }
    }

    /// Returns the key of the current entry.
    #[must_use]
    pub fn key(&self) -> &'a K {
        self.tree.entry(self.node).0
    }

    /// Returns the value of the current entry.
    #[must_use]
    pub fn value(&self) -> &'a V {
        self.tree.entry(self.node).1
    }

    /// Returns the key and value of the current entry.
    #[must_use]
    pub fn key_value(&self) -> (&'a K, &'a V) {
        self.tree.entry(self.node)
    }

    /// Returns the zero-based position of the current entry in sorted order.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn rank(&self) -> usize {
        self.tree.rank_of_handle(self.node)
    }

    /// Moves to the entry with the next larger key.
    ///
    /// Returns `false` and stays put if the cursor is on the last entry.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, O(1) amortized over a full walk.
    pub fn move_next(&mut self) -> bool {
        match self.tree.successor(self.node) {
            Some(next) => {
                self.node = next;
                true
            }
            None => false,
        }
    }

    /// Moves to the entry with the next smaller key.
    ///
    /// Returns `false` and stays put if the cursor is on the first entry.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, O(1) amortized over a full walk.
    pub fn move_prev(&mut self) -> bool {
        match self.tree.predecessor(self.node) {
            Some(prev) => {
                self.node = prev;
                true
            }
            None => false,
        }
    }

    /// Returns the entry after the current one without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<(&'a K, &'a V)> {
        self.tree.successor(self.node).map(|handle| self.tree.entry(handle))
    }

    /// Returns the entry before the current one without moving.
    #[must_use]
    pub fn peek_prev(&self) -> Option<(&'a K, &'a V)> {
        self.tree.predecessor(self.node).map(|handle| self.tree.entry(handle))
    }
}

impl<K, V, C> Clone for Cursor<'_, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, C> Copy for Cursor<'_, K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Cursor<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, value) = self.key_value();
        f.debug_struct("Cursor").field("key", key).field("value", value).finish()
    }
}
