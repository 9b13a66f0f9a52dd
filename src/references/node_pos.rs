use crate::Variant;
use core::{fmt::Debug, marker::PhantomData};

/// Position of a node in the underlying storage of a self referential collection.
///
/// Links among nodes and the ends of a collection are node positions rather than
/// pointers; therefore, following a link never dereferences freed memory. A position
/// stays the same until the collection reclaims the memory of its closed nodes.
pub struct NodePos<V: Variant> {
    pos: usize,
    phantom: PhantomData<fn() -> V>,
}

// Only the position is copied, so "V" does not need to be copy itself.
impl<V: Variant> Copy for NodePos<V> {}

impl<V: Variant> Clone for NodePos<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> PartialEq for NodePos<V> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<V: Variant> Eq for NodePos<V> {}

impl<V: Variant> core::hash::Hash for NodePos<V> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl<V: Variant> Debug for NodePos<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("NodePos").field(&self.pos).finish()
    }
}

impl<V: Variant> NodePos<V> {
    /// Creates a new node position wrapping the given storage `position`.
    #[inline(always)]
    pub fn new(position: usize) -> Self {
        Self {
            pos: position,
            phantom: PhantomData,
        }
    }

    /// Returns the position of the node in the underlying storage.
    #[inline(always)]
    pub fn get(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub(crate) fn relocated(&self, relocation: &[usize]) -> Self {
        debug_assert!(relocation[self.pos] != usize::MAX, "link to a closed node");
        Self::new(relocation[self.pos])
    }
}
