use super::handle::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// One stored entry plus its red-black bookkeeping.
///
/// `left` and `right` own their subtrees. `parent` is a back reference used
/// for upward walks and fixups only.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    // Number of nodes in the subtree rooted here, this one included.
    pub(crate) size: usize,
    pub(crate) parent: Option<Handle>,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a detached red node holding a single entry.
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            size: 1,
            parent: None,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
