use core::cmp::Ordering;

/// A total order over keys, fixed for the lifetime of a map.
///
/// Any `Fn(&K, &K) -> Ordering` closure is a comparator, and [`Natural`]
/// orders keys by their [`Ord`] implementation. Changing the order a
/// comparator produces while keys are stored is a logic error: lookups may
/// miss and ranks may be wrong, but memory safety is not affected.
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeMap;
///
/// // Longest word first, ties broken alphabetically.
/// let by_length = |a: &&str, b: &&str| b.len().cmp(&a.len()).then_with(|| a.cmp(b));
/// let mut map: OSRBTreeMap<&str, i32, _> = OSRBTreeMap::with_comparator(by_length);
/// map.insert("fig", 1);
/// map.insert("banana", 2);
/// map.insert("kiwi", 3);
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, ["banana", "kiwi", "fig"]);
/// ```
pub trait Compare<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation. This is the default
/// comparator of [`OSRBTreeMap`](crate::OSRBTreeMap).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
