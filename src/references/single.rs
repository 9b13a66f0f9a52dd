use super::{NodePos, refs::Refs};
use crate::variant::Variant;
use core::fmt::Debug;

/// A single node reference.
pub struct RefsSingle<V>(Option<NodePos<V>>)
where
    V: Variant;

impl<V: Variant> Clone for RefsSingle<V> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<V: Variant> Debug for RefsSingle<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RefsSingle").field(&self.0).finish()
    }
}

impl<V: Variant> Refs for RefsSingle<V> {
    #[inline(always)]
    fn empty() -> Self {
        Self(None)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline(always)]
    fn clear(&mut self) {
        _ = self.0.take();
    }

    #[inline(always)]
    fn relocate(&mut self, relocation: &[usize]) {
        if let Some(x) = &mut self.0 {
            *x = x.relocated(relocation);
        }
    }
}

impl<V: Variant> RefsSingle<V> {
    /// Returns the position of the referenced node.
    #[inline(always)]
    pub fn get(&self) -> Option<NodePos<V>> {
        self.0
    }

    /// Sets the referenced node to the given `node_pos`.
    #[inline(always)]
    pub fn set(&mut self, node_pos: Option<NodePos<V>>) {
        self.0 = node_pos
    }

    /// Sets the referenced node to the given `node_pos`.
    #[inline(always)]
    pub fn set_some(&mut self, node_pos: NodePos<V>) {
        self.0 = Some(node_pos)
    }

    /// Un-sets the reference.
    #[inline(always)]
    pub fn set_none(&mut self) {
        self.0 = None
    }
}
