/// Node utilization of the underlying storage of the self referential collection.
///
/// `num_active_nodes + num_closed_nodes` is the length of the underlying pinned vector,
/// which is less than or equal to the `capacity`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Utilization {
    /// Number of positions that is already allocated.
    pub capacity: usize,
    /// Number of active nodes holding data.
    pub num_active_nodes: usize,
    /// Number of closed nodes, holes left by removals which are not yet reclaimed.
    pub num_closed_nodes: usize,
}

impl Utilization {
    /// Returns true if there exists no hole in the storage.
    pub fn has_no_holes(&self) -> bool {
        self.num_closed_nodes == 0
    }
}
