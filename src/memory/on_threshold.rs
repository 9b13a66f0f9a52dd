use super::policy::MemoryPolicy;
use crate::{CoreCol, Node, Variant};
use orx_pinned_vec::PinnedVec;

/// Memory reclaim policy which triggers the reclaim operation whenever the node utilization
/// falls below a certain threshold.
///
/// Specifically, memory of closed nodes will be reclaimed whenever the ratio of closed nodes to all nodes exceeds one over `2^D`.
/// * when `D = 0`: memory will be reclaimed when utilization is below 0.00% (equivalent to never).
/// * when `D = 1`: memory will be reclaimed when utilization is below 50.00%.
/// * when `D = 2`: memory will be reclaimed when utilization is below 75.00%.
/// * when `D = 3`: memory will be reclaimed when utilization is below 87.50%.
/// * when `D = 4`: memory will be reclaimed when utilization is below 93.75%.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimOnThreshold<const D: usize>;

impl<const D: usize> MemoryPolicy for MemoryReclaimOnThreshold<D> {
    fn reclaim_closed_nodes<V, P>(col: &mut CoreCol<V, P>) -> bool
    where
        V: Variant,
        P: PinnedVec<Node<V>>,
    {
        let num_active_nodes = col.len();
        let used = col.nodes().len();
        let allowed_vacant = used >> D;
        let num_vacant = used - num_active_nodes;

        match num_vacant <= allowed_vacant {
            true => false,
            false => col.reclaim_closed_nodes(),
        }
    }
}
