use crate::{NodePos, Refs, Utilization, Variant, node::Node};
use orx_pinned_vec::PinnedVec;

/// Core collection of the self referential collection.
///
/// Owns every node of the collection in a pinned vector; links among the nodes
/// and the ends of the collection are positions in this vector.
pub struct CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    nodes: P,
    ends: V::Ends,
    len: usize,
}

impl<V, P> Default for CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    /// Creates a new empty collection.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self {
            nodes: P::default(),
            ends: Refs::empty(),
            len: 0,
        }
    }

    // get

    /// Returns current node utilization of the collection.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: self.nodes.len() - self.len,
        }
    }

    /// Returns number of active nodes of the collection.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not the collection is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the underlying nodes storage.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    /// Returns a reference to the node at the given `node_pos`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds of the storage.
    #[inline(always)]
    pub fn node(&self, node_pos: NodePos<V>) -> &Node<V> {
        &self.nodes[node_pos.get()]
    }

    /// Returns a reference to the data of the node at the given `node_pos`;
    /// None if the node is closed.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds of the storage.
    #[inline(always)]
    pub fn data(&self, node_pos: NodePos<V>) -> Option<&V::Item> {
        self.node(node_pos).data()
    }

    /// Returns a reference to the ends of the collection.
    #[inline(always)]
    pub fn ends(&self) -> &V::Ends {
        &self.ends
    }

    // mut

    /// Returns a mutable reference to the node at the given `node_pos`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds of the storage.
    #[inline(always)]
    pub fn node_mut(&mut self, node_pos: NodePos<V>) -> &mut Node<V> {
        &mut self.nodes[node_pos.get()]
    }

    /// Returns a mutable reference to the data of the node at the given `node_pos`;
    /// None if the node is closed.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds of the storage.
    #[inline(always)]
    pub fn data_mut(&mut self, node_pos: NodePos<V>) -> Option<&mut V::Item> {
        self.node_mut(node_pos).data_mut()
    }

    /// Returns a mutable reference to the ends of the collection.
    #[inline(always)]
    pub fn ends_mut(&mut self) -> &mut V::Ends {
        &mut self.ends
    }

    /// Pushes a free node with the given `data` and returns its position.
    pub fn push(&mut self, data: V::Item) -> NodePos<V> {
        self.len += 1;
        self.nodes.push(Node::new_free_node(data));
        NodePos::new(self.nodes.len() - 1)
    }

    /// Closes the node at the given `node_pos` and returns its data.
    ///
    /// The node becomes a hole in the storage; the caller is responsible for
    /// unlinking it from its neighbors and from the ends.
    ///
    /// Returns None if the node was already closed.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds of the storage.
    pub fn close(&mut self, node_pos: NodePos<V>) -> Option<V::Item> {
        let data = self.node_mut(node_pos).close();
        if data.is_some() {
            self.len -= 1;
        }
        data
    }

    pub(crate) fn clear_core(&mut self) {
        self.len = 0;
        self.ends.clear();
        self.nodes.clear();
    }

    /// Moves every active node to the front of the storage preserving their relative order,
    /// drops the closed nodes and rewrites every link to the new positions.
    ///
    /// Returns whether or not the storage has changed; i.e., whether any active node has
    /// moved or any closed node has been dropped. Positions of dropped nodes are handed out
    /// again by subsequent pushes.
    pub(crate) fn reclaim_closed_nodes(&mut self) -> bool {
        let used = self.nodes.len();
        let mut relocation = vec![usize::MAX; used];
        let mut nodes_moved = false;
        let mut vacant = 0;

        for occupied in 0..used {
            if self.nodes[occupied].is_active() {
                relocation[occupied] = vacant;
                if vacant != occupied {
                    self.nodes.swap(vacant, occupied);
                    nodes_moved = true;
                }
                vacant += 1;
            }
        }

        debug_assert_eq!(vacant, self.len);
        self.nodes.truncate(vacant);

        if nodes_moved {
            for position in 0..vacant {
                self.nodes[position].relocate(&relocation);
            }
            self.ends.relocate(&relocation);
        }

        vacant < used
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RefsNone, RefsSingle};
    use orx_split_vec::SplitVec;

    struct Singly;
    impl Variant for Singly {
        type Item = char;
        type Prev = RefsNone;
        type Next = RefsSingle<Self>;
        type Ends = RefsSingle<Self>;
    }

    type Col = CoreCol<Singly, SplitVec<Node<Singly>>>;

    fn chain(col: &Col) -> Vec<char> {
        let mut letters = vec![];
        let mut current = col.ends().get();
        while let Some(pos) = current {
            letters.extend(col.data(pos).copied());
            current = col.node(pos).next().get();
        }
        letters
    }

    fn push_front(col: &mut Col, letter: char) -> NodePos<Singly> {
        let pos = col.push(letter);
        let old_front = col.ends().get();
        col.node_mut(pos).next_mut().set(old_front);
        col.ends_mut().set_some(pos);
        pos
    }

    #[test]
    fn close_leaves_a_hole() {
        let mut col = Col::new();
        let a = push_front(&mut col, 'a');
        push_front(&mut col, 'b');

        assert_eq!(col.close(a), Some('a'));
        assert_eq!(col.close(a), None);
        assert_eq!(col.len(), 1);
        assert_eq!(
            col.utilization(),
            Utilization {
                capacity: col.nodes().capacity(),
                num_active_nodes: 1,
                num_closed_nodes: 1
            }
        );
    }

    #[test]
    fn reclaim_relocates_links_and_ends() {
        let mut col = Col::new();
        let positions: Vec<_> = "abcdef".chars().map(|x| push_front(&mut col, x)).collect();
        assert_eq!(chain(&col), vec!['f', 'e', 'd', 'c', 'b', 'a']);

        // unlink 'a' (back) and 'c' (middle); 'b' now points to nothing, 'd' to 'b'
        col.node_mut(positions[1]).next_mut().set_none();
        col.node_mut(positions[3]).next_mut().set_some(positions[1]);
        _ = col.close(positions[0]);
        _ = col.close(positions[2]);

        assert!(col.reclaim_closed_nodes());

        assert_eq!(col.nodes().len(), 4);
        assert!(col.utilization().has_no_holes());
        assert_eq!(chain(&col), vec!['f', 'e', 'd', 'b']);
    }

    #[test]
    fn reclaim_without_holes_moves_nothing() {
        let mut col = Col::new();
        for x in "xyz".chars() {
            push_front(&mut col, x);
        }

        assert!(!col.reclaim_closed_nodes());
        assert_eq!(chain(&col), vec!['z', 'y', 'x']);
    }

    #[test]
    fn reclaim_of_trailing_holes_reports_change() {
        let mut col = Col::new();
        let positions: Vec<_> = "xyz".chars().map(|x| push_front(&mut col, x)).collect();

        col.ends_mut().set_some(positions[1]);
        _ = col.close(positions[2]);

        assert!(col.reclaim_closed_nodes());
        assert_eq!(col.nodes().len(), 2);
        assert_eq!(chain(&col), vec!['y', 'x']);

        // the dropped position is handed out again
        assert_eq!(push_front(&mut col, 'w'), positions[2]);
        assert_eq!(chain(&col), vec!['w', 'y', 'x']);
    }
}
