use super::NodePos;
use crate::{MemoryPolicy, MemoryState, Node, NodeIdxError, SelfRefCol, Variant};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

/// A node index providing safe and constant time access to elements
/// of the self referential collection.
///
/// The index remembers the memory state of the collection at the time it was created;
/// it is invalidated once the collection reorganizes its nodes to reclaim memory.
pub struct NodeIdx<V: Variant> {
    pos: NodePos<V>,
    state: MemoryState,
}

impl<V: Variant> core::hash::Hash for NodeIdx<V> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
        self.state.hash(state);
    }
}

// Only the position is copied, so "V" does not need to be copy itself.
impl<V: Variant> Copy for NodeIdx<V> {}

impl<V: Variant> Clone for NodeIdx<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> Debug for NodeIdx<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeIdx")
            .field("pos", &self.pos.get())
            .field("state", &self.state)
            .finish()
    }
}

impl<V: Variant> PartialEq for NodeIdx<V> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.state == other.state
    }
}

impl<V: Variant> Eq for NodeIdx<V> {}

impl<V> NodeIdx<V>
where
    V: Variant,
{
    /// Creates a new index for the element at the given `node_pos`
    /// and the collection with the given `state`.
    #[inline(always)]
    pub fn new(state: MemoryState, node_pos: NodePos<V>) -> Self {
        Self {
            pos: node_pos,
            state,
        }
    }

    /// Converts the node index into a node position, ignoring its memory state.
    #[inline(always)]
    pub fn node_pos(&self) -> NodePos<V> {
        self.pos
    }

    /// Returns true only if this index is valid for the given `collection`.
    ///
    /// A node index is valid iff it satisfies the following conditions:
    ///
    /// * Memory state of the `collection` has not changed since this index was created.
    /// * It points to a position within the storage of the `collection`.
    /// * The node at this position is still active.
    #[inline(always)]
    pub fn is_valid_for<M, P>(&self, collection: &SelfRefCol<V, M, P>) -> bool
    where
        M: MemoryPolicy,
        P: PinnedVec<Node<V>>,
    {
        self.validate_for(collection).is_ok()
    }

    /// Returns the node position if this index is valid for the given `collection`;
    /// the reason of invalidity otherwise.
    pub fn validate_for<M, P>(
        &self,
        collection: &SelfRefCol<V, M, P>,
    ) -> Result<NodePos<V>, NodeIdxError>
    where
        M: MemoryPolicy,
        P: PinnedVec<Node<V>>,
    {
        match self.state == collection.memory_state() {
            false => Err(NodeIdxError::ReorganizedCollection),
            true => match collection.nodes().get(self.pos.get()) {
                None => Err(NodeIdxError::OutOfBounds),
                Some(node) if node.is_closed() => Err(NodeIdxError::RemovedNode),
                Some(_) => Ok(self.pos),
            },
        }
    }
}
