use super::{NodePos, refs::Refs};
use crate::variant::Variant;
use core::fmt::Debug;

/// A constant number of optional node references.
///
/// The front and rear of a queue are represented as a `RefsArray<2, V>`.
pub struct RefsArray<const N: usize, V>([Option<NodePos<V>>; N])
where
    V: Variant;

impl<const N: usize, V: Variant> Clone for RefsArray<N, V> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<const N: usize, V: Variant> Debug for RefsArray<N, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RefsArray").field(&self.0).finish()
    }
}

impl<const N: usize, V: Variant> Refs for RefsArray<N, V> {
    #[inline(always)]
    fn empty() -> Self {
        Self([None; N])
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.iter().all(|x| x.is_none())
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.0.iter_mut().for_each(|x| *x = None);
    }

    fn relocate(&mut self, relocation: &[usize]) {
        for x in self.0.iter_mut().flatten() {
            *x = x.relocated(relocation);
        }
    }
}

impl<const N: usize, V: Variant> RefsArray<N, V> {
    /// Returns the node position at the `ref_idx`-th slot.
    ///
    /// # Panics
    ///
    /// Panics if `ref_idx` is not less than `N`.
    #[inline(always)]
    pub fn get(&self, ref_idx: usize) -> Option<NodePos<V>> {
        self.0[ref_idx]
    }

    /// Sets the `ref_idx`-th slot to the given `node_pos`.
    ///
    /// # Panics
    ///
    /// Panics if `ref_idx` is not less than `N`.
    #[inline(always)]
    pub fn set(&mut self, ref_idx: usize, node_pos: Option<NodePos<V>>) {
        self.0[ref_idx] = node_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RefsNone;

    struct Var;
    impl Variant for Var {
        type Item = char;
        type Prev = RefsNone;
        type Next = RefsNone;
        type Ends = RefsArray<2, Self>;
    }

    #[test]
    fn empty_until_every_slot_is_cleared() {
        let mut refs = RefsArray::<2, Var>::empty();
        assert!(refs.is_empty());

        refs.set(0, Some(NodePos::new(3)));
        refs.set(1, Some(NodePos::new(7)));
        assert!(!refs.is_empty());

        refs.set(1, None);
        assert_eq!(refs.get(0), Some(NodePos::new(3)));
        assert_eq!(refs.get(1), None);
        assert!(!refs.is_empty());

        refs.clear();
        assert!(refs.is_empty());
    }

    #[test]
    fn relocate_rewrites_positions() {
        let mut refs = RefsArray::<2, Var>::empty();
        refs.set(0, Some(NodePos::new(2)));

        refs.relocate(&[usize::MAX, usize::MAX, 0]);

        assert_eq!(refs.get(0), Some(NodePos::new(0)));
        assert_eq!(refs.get(1), None);
    }
}
