/// Memory state of a self referential collection.
///
/// The state changes every time the positions of the nodes change; i.e., whenever closed
/// nodes are reclaimed or the collection is cleared. Node indices created in an earlier
/// state are no longer valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MemoryState {
    id: usize,
}

impl MemoryState {
    pub(crate) const fn successor_state(&self) -> Self {
        Self {
            id: self.id.wrapping_add(1),
        }
    }
}
