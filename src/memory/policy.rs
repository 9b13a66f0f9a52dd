use crate::{CoreCol, Node, Variant};
use orx_pinned_vec::PinnedVec;

/// Policy which determines when the memory of closed nodes will be reclaimed.
///
/// Two implementors are:
/// * [`MemoryReclaimOnThreshold::<D>`] reclaims unused holes whenever the utilization of the memory falls below a constant threshold determined by `D`.
/// * [`MemoryReclaimNever`] which never reclaims the holes due to popped or removed; i.e., closed, nodes.
///   This approach has the advantage that a `NodeIdx` is never invalidated due to memory reorganization.
///
/// [`MemoryReclaimOnThreshold::<D>`]: crate::MemoryReclaimOnThreshold
/// [`MemoryReclaimNever`]: crate::MemoryReclaimNever
pub trait MemoryPolicy: Clone + Default {
    /// Reclaims closed nodes if the policy decides to; returns whether or not the storage
    /// has changed, either by moving active nodes or by dropping closed ones.
    ///
    /// Assume that **A** below stands for active nodes and **x** designates a closed or popped node.
    /// If the underlying storage has the following layout at a certain stage:
    /// * `[ x, x, A, x, A, A, A, x, A, x ]`
    ///
    /// the reclaimer first reorganizes the nodes so that we have:
    /// * `[ A, A, A, A, A, x, x, x, x, x ]`
    ///
    /// and next trims the storage to reclaim memory
    /// * `[ A, A, A, A, A ]`
    ///
    /// Relative storage order of the **A**s is preserved and every link among them is
    /// rewritten to the new positions.
    fn reclaim_closed_nodes<V, P>(col: &mut CoreCol<V, P>) -> bool
    where
        V: Variant,
        P: PinnedVec<Node<V>>;
}
