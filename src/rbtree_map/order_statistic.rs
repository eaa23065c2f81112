use core::ops::{Index, IndexMut};

use super::{Cursor, OSRBTreeMap};
use crate::Rank;
use crate::compare::Compare;

impl<K, V, C: Compare<K>> OSRBTreeMap<K, V, C> {
    /// Returns the number of stored keys strictly less than `key`.
    ///
    /// `key` does not have to be stored. For a stored key this is its
    /// zero-based position in sorted order.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(10, "a"), (20, "b"), (30, "c")]);
    ///
    /// assert_eq!(map.order_of_key(&5), 0);
    /// assert_eq!(map.order_of_key(&20), 1);
    /// assert_eq!(map.order_of_key(&25), 2);
    /// assert_eq!(map.order_of_key(&99), 3);
    /// ```
    #[must_use]
    pub fn order_of_key(&self, key: &K) -> usize {
        self.raw.order_of_key(key)
    }

    /// Returns the zero-based rank of `key` in sorted order, or `None` if the
    /// key is not present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(10, "a"), (20, "b")]);
    ///
    /// assert_eq!(map.rank_of(&20), Some(1));
    /// assert_eq!(map.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, key: &K) -> Option<usize> {
        self.raw.rank_of(key)
    }
}

impl<K, V, C> OSRBTreeMap<K, V, C> {
    /// Returns a cursor on the entry at zero-based position `order` in sorted
    /// order, or `None` if `order >= len`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(30, "c"), (10, "a"), (20, "b")]);
    ///
    /// let cursor = map.find_by_order(1).unwrap();
    /// assert_eq!(cursor.key_value(), (&20, &"b"));
    /// assert!(map.find_by_order(3).is_none());
    /// ```
    #[must_use]
    pub fn find_by_order(&self, order: usize) -> Option<Cursor<'_, K, V, C>> {
        self.raw.select(order).map(|handle| Cursor::new(&self.raw, handle))
    }

    /// Returns the key-value pair at position `order` in sorted order.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get_by_order(&self, order: usize) -> Option<(&K, &V)> {
        self.raw.select(order).map(|handle| self.raw.entry(handle))
    }

    /// Returns the key and a mutable reference to the value at position
    /// `order` in sorted order.
    ///
    /// The key stays shared because changing it could break the ordering.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::from([(10, "a"), (5, "b")]);
    ///
    /// if let Some((key, value)) = map.get_by_order_mut(0) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    ///
    /// assert_eq!(map.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_order_mut(&mut self, order: usize) -> Option<(&K, &mut V)> {
        let handle = self.raw.select(order)?;
        Some(self.raw.entry_mut(handle))
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTreeMap, Rank};
///
/// let map = OSRBTreeMap::from([("a", 1), ("b", 2)]);
///
/// assert_eq!(map[Rank(0)], 1);
/// ```
impl<K, V, C> Index<Rank> for OSRBTreeMap<K, V, C> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_order(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}

/// Mutably indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTreeMap, Rank};
///
/// let mut map = OSRBTreeMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
///
/// assert_eq!(map.get(&"b"), Some(&5));
/// ```
impl<K, V, C> IndexMut<Rank> for OSRBTreeMap<K, V, C> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_order_mut(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}
