use crate::{CoreCol, MemoryPolicy, Node, SelfRefCol, Variant};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

impl<V, P> Debug for CoreCol<V, P>
where
    V: Variant,
    V::Item: Debug,
    P: PinnedVec<Node<V>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CoreCol")
            .field("len", &self.len())
            .field("storage_len", &self.nodes().len())
            .field("ends", self.ends())
            .field("nodes", &NodesDebug(self))
            .finish()
    }
}

impl<V, M, P> Debug for SelfRefCol<V, M, P>
where
    V: Variant,
    V::Item: Debug,
    M: MemoryPolicy,
    P: PinnedVec<Node<V>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelfRefCol")
            .field("memory_state", &self.memory_state())
            .field("core", &**self)
            .finish()
    }
}

struct NodesDebug<'a, V: Variant, P: PinnedVec<Node<V>>>(&'a CoreCol<V, P>);

impl<V, P> Debug for NodesDebug<'_, V, P>
where
    V: Variant,
    V::Item: Debug,
    P: PinnedVec<Node<V>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.nodes().iter()).finish()
    }
}
