use alloc::boxed::Box;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use log::{debug, trace};

use crate::compare::{Compare, Natural};
use crate::raw::{Handle, RawRBTree};

mod capacity;
mod cursor;
mod order_statistic;

pub use cursor::Cursor;

/// The hook that receives entries the map discards.
type Destructor<K, V> = Box<dyn FnMut(K, V) + Send>;

/// An ordered map based on a [red-black tree] augmented with subtree sizes.
///
/// Keys are kept in the order given by a comparator: [`Natural`] (the key's
/// [`Ord`] implementation) by default, or any `Fn(&K, &K) -> Ordering`
/// supplied through [`with_comparator`]. Besides the usual map operations the
/// tree answers rank queries ([`order_of_key`]) and selection queries
/// ([`find_by_order`]) in O(log n).
///
/// Lookups return a [`Cursor`] positioned on the matching entry, or `None`
/// when there is no such entry. A cursor can step to the neighbouring
/// entries in either direction without allocating.
///
/// It is a logic error for a key to be modified in such a way that the key's
/// ordering relative to any other key, as determined by the comparator,
/// changes while it is in the map. The behavior resulting from such a logic
/// error is not specified, but will be encapsulated to the `OSRBTreeMap` that
/// observed the logic error and not result in undefined behavior.
///
/// # Discarded entries
///
/// A map can be given a destructor with [`with_destructor`]. It is called
/// with the owned key and value of every entry the map throws away: entries
/// removed by [`erase`], entries removed by [`clear`], and entries still
/// stored when the map is dropped. Operations that hand the entry back to the
/// caller ([`remove`], [`remove_entry`], [`pop_first`], [`pop_last`], and the
/// old value returned by [`insert`]) do not call it.
///
/// Because dropping the map runs the destructor, the map implements [`Drop`]
/// and the borrow checker treats its keys and values as used at that point.
/// Anything the keys or values borrow must therefore strictly outlive the
/// map, which is stricter than for `BTreeMap`. Declare the borrowed data
/// before the map:
///
/// ```
/// use osrb_tree::OSRBTreeMap;
///
/// let owned = String::from("long-lived");
/// let mut map = OSRBTreeMap::new();
/// map.insert(1, owned.as_str());
/// assert_eq!(map[&1], "long-lived");
/// ```
///
/// Declared the other way round, `owned` is dropped first while the map
/// still holds a borrow of it:
///
/// ```compile_fail,E0597
/// use osrb_tree::OSRBTreeMap;
///
/// let mut map = OSRBTreeMap::new();
/// let owned = String::from("short-lived");
/// map.insert(1, owned.as_str());
/// ```
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeMap;
///
/// let mut scores = OSRBTreeMap::new();
/// for (name, score) in [("mallory", 71), ("alice", 93), ("bob", 85), ("carol", 88)] {
///     scores.insert(name, score);
/// }
///
/// // Rank: how many names sort before "bob"?
/// assert_eq!(scores.order_of_key(&"bob"), 1);
///
/// // Selection: the third name in sorted order.
/// let third = scores.find_by_order(2).unwrap();
/// assert_eq!(third.key_value(), (&"carol", &88));
///
/// // Cursors walk in both directions.
/// let mut cursor = scores.find(&"bob").unwrap();
/// assert!(cursor.move_next());
/// assert_eq!(*cursor.key(), "carol");
/// assert!(cursor.move_prev() && cursor.move_prev());
/// assert_eq!(*cursor.key(), "alice");
/// assert!(!cursor.move_prev());
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
/// [`with_comparator`]: OSRBTreeMap::with_comparator
/// [`with_destructor`]: OSRBTreeMap::with_destructor
/// [`order_of_key`]: OSRBTreeMap::order_of_key
/// [`find_by_order`]: OSRBTreeMap::find_by_order
/// [`erase`]: OSRBTreeMap::erase
/// [`clear`]: OSRBTreeMap::clear
/// [`remove`]: OSRBTreeMap::remove
/// [`remove_entry`]: OSRBTreeMap::remove_entry
/// [`pop_first`]: OSRBTreeMap::pop_first
/// [`pop_last`]: OSRBTreeMap::pop_last
/// [`insert`]: OSRBTreeMap::insert
pub struct OSRBTreeMap<K, V, C = Natural> {
    raw: RawRBTree<K, V, C>,
    destroy: Option<Destructor<K, V>>,
}

/// An iterator over the entries of an `OSRBTreeMap`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`OSRBTreeMap`].
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeMap;
///
/// let map = OSRBTreeMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OSRBTreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, C = Natural> {
    tree: &'a RawRBTree<K, V, C>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An iterator over the keys of an `OSRBTreeMap`.
///
/// This `struct` is created by the [`keys`](OSRBTreeMap::keys) method.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V, C = Natural> {
    inner: Iter<'a, K, V, C>,
}

/// An iterator over the values of an `OSRBTreeMap`.
///
/// This `struct` is created by the [`values`](OSRBTreeMap::values) method.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, C = Natural> {
    inner: Iter<'a, K, V, C>,
}

impl<K: Ord, V> OSRBTreeMap<K, V> {
    /// Makes a new, empty `OSRBTreeMap` ordered by `K`'s [`Ord`]
    /// implementation.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        OSRBTreeMap {
            raw: RawRBTree::new(Natural),
            destroy: None,
        }
    }
}

impl<K, V, C: Compare<K>> OSRBTreeMap<K, V, C> {
    /// Makes a new, empty `OSRBTreeMap` ordered by `compare`.
    ///
    /// The comparator must describe a total order and must not change its
    /// answers while the map holds keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// map.insert(1, "one");
    /// map.insert(3, "three");
    /// map.insert(2, "two");
    ///
    /// assert_eq!(map.begin().map(|c| *c.key()), Some(3));
    /// ```
    #[must_use]
    pub const fn with_comparator(compare: C) -> Self {
        OSRBTreeMap {
            raw: RawRBTree::new(compare),
            destroy: None,
        }
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned.
    ///
    /// If the map did have this key present, the value is updated, and the
    /// old value is returned to the caller. The key is not updated; the
    /// stored key is kept and `key` is dropped. The destructor is not called
    /// for the old value, since ownership of it is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old = self.raw.insert(key, value);
        if old.is_some() {
            trace!("insert replaced an existing value ({} entries)", self.raw.len());
        }
        old
    }

    /// Removes `key` from the map and hands the discarded entry to the
    /// destructor, if one is set. Returns whether the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let discarded = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&discarded);
    /// let mut map = OSRBTreeMap::new().with_destructor(move |k, v| sink.lock().unwrap().push((k, v)));
    /// map.insert(1, "a");
    ///
    /// assert!(map.erase(&1));
    /// assert!(!map.erase(&1));
    /// assert_eq!(*discarded.lock().unwrap(), [(1, "a")]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn erase(&mut self, key: &K) -> bool {
        if let Some((key, value)) = self.raw.remove_entry(key) {
            self.discard(key, value);
            true
        } else {
            trace!("erase found no matching key ({} entries)", self.raw.len());
            false
        }
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map. The destructor is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.raw.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map. The destructor is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.raw.remove_entry(key)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get(&self, key: &K) -> Option<&V> {
        self.raw.search(key).map(|handle| self.raw.entry(handle).1)
    }

    /// Returns the stored key-value pair corresponding to the supplied key.
    ///
    /// This is useful for comparators under which distinct keys compare
    /// equal, since it returns the key that is actually stored.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.search(key).map(|handle| self.raw.entry(handle))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let handle = self.raw.search(key)?;
        Some(self.raw.entry_mut(handle).1)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains_key(&self, key: &K) -> bool {
        self.raw.search(key).is_some()
    }

    /// Returns a cursor positioned on `key`, or `None` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.find(&2).map(|c| *c.value()), Some("b"));
    /// assert!(map.find(&3).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn find(&self, key: &K) -> Option<Cursor<'_, K, V, C>> {
        self.raw.search(key).map(|handle| Cursor::new(&self.raw, handle))
    }

    /// Returns a cursor on the entry with the smallest key greater than or
    /// equal to `key`, or `None` if every key is smaller.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.lower_bound(&20).map(|c| *c.key()), Some(20));
    /// assert_eq!(map.lower_bound(&21).map(|c| *c.key()), Some(30));
    /// assert!(map.lower_bound(&31).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn lower_bound(&self, key: &K) -> Option<Cursor<'_, K, V, C>> {
        self.raw.lower_bound(key).map(|handle| Cursor::new(&self.raw, handle))
    }

    /// Returns a cursor on the entry with the **largest key less than or
    /// equal to** `key`, or `None` if every key is greater.
    ///
    /// Note that this is the mirror image of [`lower_bound`], not the
    /// "first key greater than `key`" found under this name elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.upper_bound(&20).map(|c| *c.key()), Some(20));
    /// assert_eq!(map.upper_bound(&29).map(|c| *c.key()), Some(20));
    /// assert!(map.upper_bound(&9).is_none());
    /// ```
    ///
    /// [`lower_bound`]: OSRBTreeMap::lower_bound
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn upper_bound(&self, key: &K) -> Option<Cursor<'_, K, V, C>> {
        self.raw.upper_bound(key).map(|handle| Cursor::new(&self.raw, handle))
    }
}

impl<K, V, C> OSRBTreeMap<K, V, C> {
    /// Sets the destructor that receives every entry this map discards.
    ///
    /// See [Discarded entries](OSRBTreeMap#discarded-entries) for exactly
    /// when it runs. Replaces any previously set destructor.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let dropped = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&dropped);
    /// {
    ///     let mut map = OSRBTreeMap::new().with_destructor(move |_k: i32, _v: i32| {
    ///         counter.fetch_add(1, Ordering::SeqCst);
    ///     });
    ///     map.insert(1, 10);
    ///     map.insert(2, 20);
    /// }
    /// assert_eq!(dropped.load(Ordering::SeqCst), 2);
    /// ```
    #[must_use]
    pub fn with_destructor<F>(mut self, destroy: F) -> Self
    where
        F: FnMut(K, V) + Send + 'static,
    {
        self.destroy = Some(Box::new(destroy));
        self
    }

    /// Returns the comparator that orders this map's keys.
    pub const fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut a = OSRBTreeMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, handing every entry to the destructor if one is set.
    ///
    /// Entries reach the destructor in storage order, not key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut a = OSRBTreeMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        if self.raw.is_empty() {
            return;
        }

        debug!("discarding {} entries", self.raw.len());
        match self.destroy.as_mut() {
            Some(destroy) => {
                for (key, value) in self.raw.drain() {
                    destroy(key, value);
                }
            }
            None => self.raw.clear(),
        }
    }

    /// Returns a cursor on the entry with the smallest key, or `None` if the
    /// map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(2, "b"), (1, "a")]);
    /// let mut cursor = map.begin().unwrap();
    /// let mut keys = vec![*cursor.key()];
    /// while cursor.move_next() {
    ///     keys.push(*cursor.key());
    /// }
    /// assert_eq!(keys, [1, 2]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn begin(&self) -> Option<Cursor<'_, K, V, C>> {
        self.raw.first().map(|handle| Cursor::new(&self.raw, handle))
    }

    /// Returns a cursor on the entry with the largest key, or `None` if the
    /// map is empty.
    ///
    /// The cursor sits on the last entry itself; there is no position past
    /// the end. Iteration ends when [`Cursor::move_next`] returns `false`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn end(&self) -> Option<Cursor<'_, K, V, C>> {
        self.raw.last().map(|handle| Cursor::new(&self.raw, handle))
    }

    /// Returns the first key-value pair in the map.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|handle| self.raw.entry(handle))
    }

    /// Returns the last key-value pair in the map.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|handle| self.raw.entry(handle))
    }

    /// Removes and returns the first element in the map. The destructor is
    /// not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.pop_first(), Some((1, "a")));
    /// assert_eq!(map.pop_first(), Some((2, "b")));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let handle = self.raw.first()?;
        Some(self.raw.remove_handle(handle))
    }

    /// Removes and returns the last element in the map. The destructor is
    /// not called.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let handle = self.raw.last()?;
        Some(self.raw.remove_handle(handle))
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { inner: self.iter() }
    }

    fn discard(&mut self, key: K, value: V) {
        if let Some(destroy) = self.destroy.as_mut() {
            destroy(key, value);
        }
    }
}

impl<K, V, C> Drop for OSRBTreeMap<K, V, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OSRBTreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Default for OSRBTreeMap<K, V> {
    fn default() -> Self {
        OSRBTreeMap::new()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for OSRBTreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for OSRBTreeMap<K, V, C> {}

impl<K: Ord, V> FromIterator<(K, V)> for OSRBTreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OSRBTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for OSRBTreeMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OSRBTreeMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V, C> IntoIterator for &'a OSRBTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Iter<'a, K, V, C> {
        self.iter()
    }
}

/// Looks up the value for `key`.
///
/// # Panics
///
/// Panics if the key is not present in the map.
impl<K, V, C: Compare<K>> Index<&K> for OSRBTreeMap<K, V, C> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor(handle);
        Some(self.tree.entry(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, C> DoubleEndedIterator for Iter<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(handle);
        Some(self.tree.entry(handle))
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Iter<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Keys<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, C> FusedIterator for Keys<'_, K, V, C> {}

impl<K, V, C> Clone for Keys<'_, K, V, C> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V, C> fmt::Debug for Keys<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Values<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, C> FusedIterator for Values<'_, K, V, C> {}

impl<K, V, C> Clone for Values<'_, K, V, C> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug, C> fmt::Debug for Values<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
