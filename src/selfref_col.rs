use crate::{
    CoreCol, MemoryPolicy, MemoryReclaimOnThreshold, MemoryState, Node, NodeIdx, NodeIdxError,
    NodePos, Variant,
};
use core::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
};
use orx_pinned_vec::PinnedVec;
use orx_split_vec::SplitVec;

/// Default memory policy of the containers: closed nodes are reclaimed once
/// more than a quarter of the used positions are holes.
pub type DefaultMemory = MemoryReclaimOnThreshold<2>;

/// `SelfRefCol` is the core data structure the stack, queue and circular list are built on.
///
/// * Nodes are stored in a `PinnedVec`, `SplitVec` by default, and never move while the
///   collection grows.
/// * Relations among nodes are positions in this storage rather than pointers.
///   Removing a node closes it and leaves a hole; links never point to a hole.
/// * The memory policy `M` decides when holes are reclaimed. Reclaiming compacts the
///   storage, rewrites every link and changes the memory state, which invalidates
///   previously created [`NodeIdx`]es.
pub struct SelfRefCol<V, M = DefaultMemory, P = SplitVec<Node<V>>>
where
    V: Variant,
    M: MemoryPolicy,
    P: PinnedVec<Node<V>>,
{
    core: CoreCol<V, P>,
    state: MemoryState,
    phantom: PhantomData<M>,
}

impl<V, M, P> Default for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy,
    P: PinnedVec<Node<V>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, M, P> Deref for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy,
    P: PinnedVec<Node<V>>,
{
    type Target = CoreCol<V, P>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<V, M, P> DerefMut for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy,
    P: PinnedVec<Node<V>>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

impl<V, M, P> SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy,
    P: PinnedVec<Node<V>>,
{
    /// Creates a new empty collection.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            core: CoreCol::new(),
            state: MemoryState::default(),
            phantom: PhantomData,
        }
    }

    /// Memory state of the collection.
    #[inline(always)]
    pub fn memory_state(&self) -> MemoryState {
        self.state
    }

    /// Creates a node index for the node at the given `node_pos` in the current memory state.
    #[inline(always)]
    pub fn node_idx(&self, node_pos: NodePos<V>) -> NodeIdx<V> {
        NodeIdx::new(self.state, node_pos)
    }

    /// Returns a reference to the element pointed by the `node_idx`;
    /// or the reason why the index is not valid for this collection.
    pub fn get(&self, node_idx: &NodeIdx<V>) -> Result<&V::Item, NodeIdxError> {
        let pos = node_idx.validate_for(self)?;
        self.core.data(pos).ok_or(NodeIdxError::RemovedNode)
    }

    /// Returns a mutable reference to the element pointed by the `node_idx`;
    /// or the reason why the index is not valid for this collection.
    pub fn get_mut(&mut self, node_idx: &NodeIdx<V>) -> Result<&mut V::Item, NodeIdxError> {
        let pos = node_idx.validate_for(self)?;
        self.core.data_mut(pos).ok_or(NodeIdxError::RemovedNode)
    }

    /// Closes the node at `node_pos`, returns its data and lets the memory policy
    /// reclaim the closed nodes.
    ///
    /// The node must already be unlinked from its neighbors and from the ends.
    pub fn close_and_reclaim(&mut self, node_pos: NodePos<V>) -> Option<V::Item> {
        let data = self.core.close(node_pos);
        self.reclaim_by_policy();
        data
    }

    /// Lets the memory policy decide whether or not the closed nodes will be reclaimed.
    ///
    /// Used after a batch of closing operations during which node positions must stay fixed.
    pub fn reclaim_by_policy(&mut self) {
        if M::reclaim_closed_nodes(&mut self.core) {
            self.state = self.state.successor_state();
        }
    }

    /// Manually reclaims the memory of all closed nodes regardless of the memory policy.
    ///
    /// Node indices created before this call are invalidated if there was any closed node.
    pub fn reclaim_closed_nodes(&mut self) {
        if self.core.reclaim_closed_nodes() {
            self.state = self.state.successor_state();
        }
    }

    /// Drops all nodes of the collection, active or closed.
    ///
    /// Node indices created before this call are invalidated.
    pub fn clear(&mut self) {
        self.core.clear_core();
        self.state = self.state.successor_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryReclaimNever, RefsNone, RefsSingle};

    struct Singly;
    impl Variant for Singly {
        type Item = String;
        type Prev = RefsNone;
        type Next = RefsSingle<Self>;
        type Ends = RefsSingle<Self>;
    }

    fn push_front<M: MemoryPolicy>(col: &mut SelfRefCol<Singly, M>, value: &str) -> NodeIdx<Singly> {
        let pos = col.push(value.to_string());
        let old_front = col.ends().get();
        col.node_mut(pos).next_mut().set(old_front);
        col.ends_mut().set_some(pos);
        col.node_idx(pos)
    }

    fn pop_front<M: MemoryPolicy>(col: &mut SelfRefCol<Singly, M>) -> Option<String> {
        col.ends().get().map(|front| {
            let next = col.node(front).next().get();
            col.ends_mut().set(next);
            col.close_and_reclaim(front).unwrap_or_default()
        })
    }

    #[test]
    fn index_survives_without_reclaim() {
        let mut col = SelfRefCol::<Singly, MemoryReclaimNever>::new();
        let a = push_front(&mut col, "a");
        let b = push_front(&mut col, "b");

        assert_eq!(col.get(&a).map(|x| x.as_str()), Ok("a"));
        assert_eq!(pop_front(&mut col).as_deref(), Some("b"));

        assert_eq!(col.get(&b), Err(NodeIdxError::RemovedNode));
        assert_eq!(col.get(&a).map(|x| x.as_str()), Ok("a"));
        assert!(a.is_valid_for(&col));
    }

    #[test]
    fn reclaim_without_holes_keeps_index() {
        let mut col = SelfRefCol::<Singly, MemoryReclaimNever>::new();
        let a = push_front(&mut col, "a");
        push_front(&mut col, "b");

        let state = col.memory_state();
        col.reclaim_closed_nodes();

        assert_eq!(col.memory_state(), state);
        assert_eq!(col.get(&a).map(|x| x.as_str()), Ok("a"));
    }

    #[test]
    fn trailing_reclaim_invalidates_index_of_dropped_slot() {
        let mut col = SelfRefCol::<Singly, MemoryReclaimNever>::new();
        let a = push_front(&mut col, "a");
        push_front(&mut col, "b");
        let c = push_front(&mut col, "c");

        // closes "c" at the back of the storage; nothing moves but the slot is dropped
        pop_front(&mut col);
        let state = col.memory_state();
        col.reclaim_closed_nodes();
        assert_ne!(col.memory_state(), state);

        // the new node reuses the position of "c"
        let d = push_front(&mut col, "d");
        assert_eq!(d.node_pos(), c.node_pos());

        assert_eq!(col.get(&c), Err(NodeIdxError::ReorganizedCollection));
        assert_eq!(col.get(&a), Err(NodeIdxError::ReorganizedCollection));
        assert_eq!(col.get(&d).map(|x| x.as_str()), Ok("d"));
    }

    #[test]
    fn moving_reclaim_changes_state() {
        let mut col = SelfRefCol::<Singly, MemoryReclaimNever>::new();
        let a = push_front(&mut col, "a");
        let b = push_front(&mut col, "b");

        // "a" is the back of the chain at position 0; unlink and close it
        let b_pos = b.node_pos();
        col.node_mut(b_pos).next_mut().set_none();
        _ = col.close(a.node_pos());
        col.reclaim_closed_nodes();

        assert_eq!(col.get(&b), Err(NodeIdxError::ReorganizedCollection));
        assert_eq!(col.get(&a), Err(NodeIdxError::ReorganizedCollection));
        assert_eq!(col.ends().get().map(|x| x.get()), Some(0));
        assert_eq!(col.len(), 1);
    }

    #[test]
    fn clear_invalidates_index() {
        let mut col = SelfRefCol::<Singly>::new();
        let a = push_front(&mut col, "a");

        col.clear();
        let b = push_front(&mut col, "b");

        assert!(!col.is_empty());
        assert_eq!(col.get(&a), Err(NodeIdxError::ReorganizedCollection));
        assert_eq!(col.get(&b).map(|x| x.as_str()), Ok("b"));
    }
}
