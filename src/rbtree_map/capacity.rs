use super::OSRBTreeMap;
use crate::compare::{Compare, Natural};
use crate::raw::RawRBTree;

impl<K: Ord, V> OSRBTreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before
    /// the node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map: OSRBTreeMap<i32, i32> = OSRBTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OSRBTreeMap {
            raw: RawRBTree::with_capacity(Natural, capacity),
            destroy: None,
        }
    }
}

impl<K, V, C: Compare<K>> OSRBTreeMap<K, V, C> {
    /// Creates an empty map ordered by `compare` with room for at least
    /// `capacity` entries.
    #[must_use]
    pub fn with_comparator_and_capacity(compare: C, capacity: usize) -> Self {
        OSRBTreeMap {
            raw: RawRBTree::with_capacity(compare, capacity),
            destroy: None,
        }
    }
}

impl<K, V, C> OSRBTreeMap<K, V, C> {
    /// Returns how many entries the map can hold before the node storage
    /// reallocates.
    ///
    /// Slots freed by removals are reused before the storage grows.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
